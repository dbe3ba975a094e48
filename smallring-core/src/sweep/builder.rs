//! Sweep configuration and its validating builder.

use std::num::NonZeroUsize;

use crate::{Result, error::SweepError, ring::RingGraph};

use super::{ExecutionStrategy, SweepDriver};

/// Ring size used when the caller does not pick one.
pub const DEFAULT_NODE_COUNT: usize = 500;
/// Exclusive upper bound of the default shortcut range `0..100`.
pub const DEFAULT_MAX_SHORTCUTS: usize = 100;
/// Trials per shortcut count used when the caller does not pick one.
pub const DEFAULT_TRIALS_PER_COUNT: usize = 10;

/// Collects sweep parameters and validates them into a [`SweepConfig`].
///
/// # Examples
/// ```
/// use smallring_core::{ExecutionStrategy, SweepBuilder};
///
/// let driver = SweepBuilder::new()
///     .with_node_count(40)
///     .with_shortcut_counts([0, 5, 10])
///     .with_trials_per_count(4)
///     .with_seed(9)
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(driver.config().node_count(), 40);
/// assert_eq!(driver.config().shortcut_counts(), &[0, 5, 10]);
/// assert_eq!(driver.config().seed(), 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepBuilder {
    node_count: usize,
    shortcut_counts: Vec<usize>,
    trials_per_count: usize,
    seed: Option<u64>,
    execution_strategy: ExecutionStrategy,
}

impl Default for SweepBuilder {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            shortcut_counts: (0..DEFAULT_MAX_SHORTCUTS).collect(),
            trials_per_count: DEFAULT_TRIALS_PER_COUNT,
            seed: None,
            execution_strategy: ExecutionStrategy::Auto,
        }
    }
}

impl SweepBuilder {
    /// Creates a builder with 500 nodes, counts `0..100`, 10 trials per
    /// count, a fresh random seed and [`ExecutionStrategy::Auto`].
    ///
    /// # Examples
    /// ```
    /// use smallring_core::{ExecutionStrategy, SweepBuilder};
    ///
    /// let builder = SweepBuilder::new();
    /// assert_eq!(builder.node_count(), 500);
    /// assert_eq!(builder.shortcut_counts().len(), 100);
    /// assert_eq!(builder.trials_per_count(), 10);
    /// assert_eq!(builder.seed(), None);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Auto);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ring size.
    #[must_use]
    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    /// Sets the shortcut counts to evaluate, in output order.
    #[must_use]
    pub fn with_shortcut_counts<I>(mut self, counts: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.shortcut_counts = counts.into_iter().collect();
        self
    }

    /// Sets the number of trials averaged per shortcut count.
    #[must_use]
    pub fn with_trials_per_count(mut self, trials: usize) -> Self {
        self.trials_per_count = trials;
        self
    }

    /// Fixes the base seed so the sweep is reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Selects how trials are scheduled.
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the configured ring size.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the configured shortcut counts.
    #[must_use]
    #[rustfmt::skip]
    pub fn shortcut_counts(&self) -> &[usize] { &self.shortcut_counts }

    /// Returns the configured trials per count.
    #[must_use]
    #[rustfmt::skip]
    pub fn trials_per_count(&self) -> usize { self.trials_per_count }

    /// Returns the fixed seed, if any.
    #[must_use]
    #[rustfmt::skip]
    pub fn seed(&self) -> Option<u64> { self.seed }

    /// Returns the configured execution strategy.
    #[must_use]
    #[rustfmt::skip]
    pub fn execution_strategy(&self) -> ExecutionStrategy { self.execution_strategy }

    /// Validates the parameters and returns the resulting configuration.
    ///
    /// A missing seed is replaced by fresh entropy so the configuration
    /// always records the seed that was used.
    ///
    /// # Errors
    /// Returns [`SweepError::InvalidSize`] when fewer than three nodes are
    /// requested, [`SweepError::InvalidShortcutCount`] when a count exceeds
    /// the `n * (n - 3) / 2` eligible pairs, and
    /// [`SweepError::InvalidTrialCount`] when the trial count is zero.
    pub fn build_config(self) -> Result<SweepConfig> {
        let ring = RingGraph::build(self.node_count)?;
        let available = ring.eligible_shortcut_count();
        if let Some(&requested) = self
            .shortcut_counts
            .iter()
            .find(|&&count| count > available)
        {
            return Err(SweepError::InvalidShortcutCount {
                requested,
                available,
            });
        }
        let trials_per_count =
            NonZeroUsize::new(self.trials_per_count).ok_or(SweepError::InvalidTrialCount {
                got: self.trials_per_count,
            })?;

        Ok(SweepConfig {
            ring,
            shortcut_counts: self.shortcut_counts,
            trials_per_count,
            seed: self.seed.unwrap_or_else(rand::random),
            execution_strategy: self.execution_strategy,
        })
    }

    /// Validates the parameters and returns a driver ready to run.
    ///
    /// # Errors
    /// Fails under the same conditions as [`Self::build_config`].
    pub fn build(self) -> Result<SweepDriver> {
        self.build_config().map(SweepDriver::new)
    }
}

/// Validated, immutable sweep parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepConfig {
    ring: RingGraph,
    shortcut_counts: Vec<usize>,
    trials_per_count: NonZeroUsize,
    seed: u64,
    execution_strategy: ExecutionStrategy,
}

impl SweepConfig {
    /// Ring shared by every trial.
    #[must_use]
    #[rustfmt::skip]
    pub fn ring(&self) -> &RingGraph { &self.ring }

    /// Ring size.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.ring.node_count() }

    /// Shortcut counts in output order.
    #[must_use]
    #[rustfmt::skip]
    pub fn shortcut_counts(&self) -> &[usize] { &self.shortcut_counts }

    /// Trials averaged per shortcut count.
    #[must_use]
    #[rustfmt::skip]
    pub fn trials_per_count(&self) -> NonZeroUsize { self.trials_per_count }

    /// Base seed for the default per-trial generators.
    #[must_use]
    #[rustfmt::skip]
    pub fn seed(&self) -> u64 { self.seed }

    /// Trial scheduling strategy.
    #[must_use]
    #[rustfmt::skip]
    pub fn execution_strategy(&self) -> ExecutionStrategy { self.execution_strategy }

    /// Total number of trials across all counts.
    #[must_use]
    pub fn total_trials(&self) -> usize {
        self.shortcut_counts
            .len()
            .saturating_mul(self.trials_per_count.get())
    }
}
