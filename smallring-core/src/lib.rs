//! Small-world diameter sweeps over rings with random shortcuts.
//!
//! A [`RingGraph`] of `n` nodes gains `k` random non-ring edges per trial; the
//! [`SweepDriver`] measures each trial's diameter with a BFS distance oracle
//! and averages the results per shortcut count.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod distance;
mod error;
mod graph;
mod ring;
mod sampler;
mod shortcuts;
mod sweep;
mod telemetry;

#[cfg(test)]
mod test_utils;

pub use crate::{
    distance::{DistanceMatrix, UNREACHABLE, all_pairs_distances, diameter, graph_diameter},
    error::{Result, SweepError, SweepErrorCode},
    graph::Graph,
    ring::{Edge, RingGraph},
    sampler::{DEFAULT_ATTEMPTS_PER_SHORTCUT, ShortcutSampler, sample_shortcuts},
    shortcuts::{ShortcutLayout, ShortcutSet},
    sweep::{
        DEFAULT_MAX_SHORTCUTS, DEFAULT_NODE_COUNT, DEFAULT_TRIALS_PER_COUNT, ExecutionStrategy,
        SeededTrials, SweepBuilder, SweepConfig, SweepDriver, SweepPoint, SweepResult, TrialId,
        TrialRngFactory, run_sweep,
    },
};
