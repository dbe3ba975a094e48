//! Seeded ring-with-shortcuts graphs for benchmarks.

use rand::{SeedableRng, rngs::SmallRng};
use smallring_core::{Graph, RingGraph, ShortcutSampler};

use crate::{error::BenchSetupError, params::GraphBenchParams};

/// Builds the ring described by `params` and adds `shortcut_count` shortcuts
/// drawn with a generator seeded from `seed`.
///
/// # Errors
/// Returns [`BenchSetupError::Sweep`] when the ring is too small or the
/// requested shortcuts cannot be sampled.
pub fn shortcut_graph(params: &GraphBenchParams, seed: u64) -> Result<Graph, BenchSetupError> {
    let ring = RingGraph::build(params.node_count)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    let shortcuts = ShortcutSampler::new(&ring).sample(params.shortcut_count, &mut rng)?;
    Ok(Graph::with_shortcuts(&ring, &shortcuts)?)
}
