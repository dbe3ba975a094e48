//! Shortcut sweeps: repeated diameter trials aggregated per shortcut count.
//!
//! A sweep is a flat list of independent trials. Each trial samples its own
//! shortcut set with its own generator, builds a [`Graph`] over the shared
//! [`RingGraph`], and measures the diameter. Diameters are reduced to one
//! [`SweepPoint`] per shortcut count after all trials finish, in the order the
//! counts were configured, so sequential and parallel runs agree exactly.

mod builder;
mod result;
mod rng;

use tracing::{Span, debug, field, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
use crate::error::SweepError;
use crate::{
    Result, distance::graph_diameter, graph::Graph, ring::RingGraph, sampler::ShortcutSampler,
    telemetry,
};

pub use builder::{
    DEFAULT_MAX_SHORTCUTS, DEFAULT_NODE_COUNT, DEFAULT_TRIALS_PER_COUNT, SweepBuilder,
    SweepConfig,
};
pub use result::{SweepPoint, SweepResult};
pub use rng::{SeededTrials, TrialId, TrialRngFactory};

/// Selects how a sweep schedules its trials.
///
/// `Auto` picks [`ExecutionStrategy::Parallel`] when the crate is built with
/// the `parallel` feature and [`ExecutionStrategy::Sequential`] otherwise.
///
/// # Examples
/// ```
/// use smallring_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::default();
/// assert_eq!(strategy, ExecutionStrategy::Auto);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionStrategy {
    /// Let the library choose.
    #[default]
    Auto,
    /// Run trials one after another on the calling thread.
    Sequential,
    /// Run trials as independent tasks on the Rayon pool.
    Parallel,
}

/// Runs a validated sweep.
///
/// # Examples
/// ```
/// use smallring_core::SweepBuilder;
///
/// let result = SweepBuilder::new()
///     .with_node_count(10)
///     .with_shortcut_counts([0, 1, 2])
///     .with_trials_per_count(5)
///     .with_seed(2024)
///     .build()
///     .expect("configuration is valid")
///     .run()
///     .expect("sweep succeeds");
/// let means: Vec<f64> = result.iter().map(|point| point.mean_diameter()).collect();
/// assert_eq!(means.len(), 3);
/// assert_eq!(means[0], 5.0);
/// ```
#[derive(Clone, Debug)]
pub struct SweepDriver {
    config: SweepConfig,
}

impl SweepDriver {
    /// Wraps a validated configuration.
    #[must_use]
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this driver runs.
    #[must_use]
    #[rustfmt::skip]
    pub fn config(&self) -> &SweepConfig { &self.config }

    /// Runs the sweep with per-trial generators derived from the configured
    /// seed.
    ///
    /// # Errors
    /// Returns [`crate::SweepError::BackendUnavailable`] when
    /// [`ExecutionStrategy::Parallel`] is requested without the `parallel`
    /// feature, and propagates the first trial failure otherwise.
    pub fn run(&self) -> Result<SweepResult> {
        self.run_with(&SeededTrials::new(self.config.seed()))
    }

    /// Runs the sweep drawing each trial's randomness from `factory`.
    ///
    /// # Errors
    /// Fails under the same conditions as [`Self::run`].
    #[instrument(
        name = "core.sweep",
        err,
        skip(self, factory),
        fields(
            node_count = self.config.node_count(),
            counts = self.config.shortcut_counts().len(),
            trials_per_count = self.config.trials_per_count().get(),
            seed = self.config.seed(),
            strategy = ?self.config.execution_strategy(),
            backend = field::Empty,
        ),
    )]
    pub fn run_with<F: TrialRngFactory>(&self, factory: &F) -> Result<SweepResult> {
        let trials = self.trial_ids();
        let diameters = match self.config.execution_strategy() {
            #[cfg(feature = "parallel")]
            ExecutionStrategy::Auto | ExecutionStrategy::Parallel => {
                Span::current().record("backend", "parallel");
                self.run_parallel(factory, &trials)?
            }
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Auto => {
                Span::current().record("backend", "sequential");
                self.run_sequential(factory, &trials)?
            }
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Parallel => {
                return Err(SweepError::BackendUnavailable {
                    requested: ExecutionStrategy::Parallel,
                });
            }
            ExecutionStrategy::Sequential => {
                Span::current().record("backend", "sequential");
                self.run_sequential(factory, &trials)?
            }
        };

        let result = self.aggregate(&diameters);
        info!(
            points = result.len(),
            trials = diameters.len(),
            "sweep completed"
        );
        Ok(result)
    }

    fn trial_ids(&self) -> Vec<TrialId> {
        let trials = self.config.trials_per_count().get();
        self.config
            .shortcut_counts()
            .iter()
            .enumerate()
            .flat_map(|(count_index, &shortcut_count)| {
                (0..trials).map(move |trial| TrialId {
                    count_index,
                    shortcut_count,
                    trial,
                })
            })
            .collect()
    }

    fn run_sequential<F: TrialRngFactory>(
        &self,
        factory: &F,
        trials: &[TrialId],
    ) -> Result<Vec<u32>> {
        let ring = self.config.ring();
        trials
            .iter()
            .map(|&id| run_trial(ring, factory, id))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run_parallel<F: TrialRngFactory>(
        &self,
        factory: &F,
        trials: &[TrialId],
    ) -> Result<Vec<u32>> {
        let ring = self.config.ring();
        trials
            .par_iter()
            .map(|&id| run_trial(ring, factory, id))
            .collect()
    }

    fn aggregate(&self, diameters: &[u32]) -> SweepResult {
        let trials = self.config.trials_per_count().get();
        let points = self
            .config
            .shortcut_counts()
            .iter()
            .zip(diameters.chunks(trials))
            .filter_map(|(&shortcut_count, chunk)| {
                let point = SweepPoint::from_diameters(shortcut_count, chunk)?;
                debug!(
                    shortcut_count,
                    mean_diameter = point.mean_diameter(),
                    min_diameter = point.min_diameter(),
                    max_diameter = point.max_diameter(),
                    "shortcut count aggregated"
                );
                Some(point)
            })
            .collect();
        SweepResult::new(self.config.node_count(), self.config.seed(), points)
    }
}

fn run_trial<F: TrialRngFactory>(ring: &RingGraph, factory: &F, id: TrialId) -> Result<u32> {
    let mut rng = factory.rng_for(id);
    let shortcuts = ShortcutSampler::new(ring).sample(id.shortcut_count, &mut rng)?;
    let diameter = graph_diameter(&Graph::with_shortcuts(ring, &shortcuts)?)?;
    telemetry::record_trial(diameter);
    Ok(diameter)
}

/// Runs a sweep with default strategy and a fresh random seed.
///
/// # Errors
/// Returns [`crate::SweepError::InvalidSize`],
/// [`crate::SweepError::InvalidShortcutCount`] or
/// [`crate::SweepError::InvalidTrialCount`] for invalid parameters, and
/// propagates trial failures.
///
/// # Examples
/// ```
/// use smallring_core::run_sweep;
///
/// let result = run_sweep(12, [0, 6], 3).expect("sweep succeeds");
/// assert_eq!(result.points()[0].mean_diameter(), 6.0);
/// assert!(result.points()[1].mean_diameter() <= 6.0);
/// ```
pub fn run_sweep<I>(
    node_count: usize,
    shortcut_counts: I,
    trials_per_count: usize,
) -> Result<SweepResult>
where
    I: IntoIterator<Item = usize>,
{
    SweepBuilder::new()
        .with_node_count(node_count)
        .with_shortcut_counts(shortcut_counts)
        .with_trials_per_count(trials_per_count)
        .build()?
        .run()
}

#[cfg(test)]
mod tests;
