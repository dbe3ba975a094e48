//! Per-trial random sources.
//!
//! Every trial owns its generator, so trials can run in any order or on any
//! thread and still draw the same shortcuts.

use rand::{RngCore, SeedableRng, rngs::SmallRng};

/// SplitMix64 increment (the 64-bit golden ratio), also used to space the
/// indices mixed into a seed.
const SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// Position of one trial inside a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrialId {
    /// Index of the shortcut count in the configured sequence.
    pub count_index: usize,
    /// Number of shortcuts the trial samples.
    pub shortcut_count: usize,
    /// Zero-based trial number within its shortcut count.
    pub trial: usize,
}

/// Supplies an independent random source for each trial.
///
/// Implementations must be deterministic in [`TrialId`] when reproducible
/// sweeps are wanted. They are shared across worker threads, hence `Sync`.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use smallring_core::{SweepBuilder, TrialId, TrialRngFactory};
///
/// /// Reuses one seed per trial number regardless of the shortcut count.
/// struct PerTrial;
///
/// impl TrialRngFactory for PerTrial {
///     type Rng = SmallRng;
///
///     fn rng_for(&self, id: TrialId) -> SmallRng {
///         SmallRng::seed_from_u64(id.trial as u64)
///     }
/// }
///
/// let driver = SweepBuilder::new()
///     .with_node_count(10)
///     .with_shortcut_counts([0, 2])
///     .with_trials_per_count(3)
///     .build()
///     .expect("configuration is valid");
/// let result = driver.run_with(&PerTrial).expect("sweep succeeds");
/// assert_eq!(result.points()[0].mean_diameter(), 5.0);
/// ```
pub trait TrialRngFactory: Sync {
    /// Generator handed to the shortcut sampler.
    type Rng: RngCore;

    /// Returns the generator for trial `id`.
    fn rng_for(&self, id: TrialId) -> Self::Rng;
}

/// Derives each trial's [`SmallRng`] from a base seed by SplitMix64 mixing
/// of the count index and the trial index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeededTrials {
    base_seed: u64,
}

impl SeededTrials {
    /// Creates a factory rooted at `base_seed`.
    #[must_use]
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    /// Returns the base seed.
    #[must_use]
    #[rustfmt::skip]
    pub fn base_seed(&self) -> u64 { self.base_seed }

    /// Returns the seed used for trial `id`.
    #[must_use]
    pub fn seed_for(&self, id: TrialId) -> u64 {
        mix_seed(mix_seed(self.base_seed, id.count_index), id.trial)
    }
}

impl TrialRngFactory for SeededTrials {
    type Rng = SmallRng;

    fn rng_for(&self, id: TrialId) -> SmallRng {
        SmallRng::seed_from_u64(self.seed_for(id))
    }
}

#[inline]
fn mix_seed(base_seed: u64, index: usize) -> u64 {
    splitmix64(base_seed ^ ((index as u64).wrapping_add(1)).wrapping_mul(SEED_SPACING))
}

#[inline]
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(SEED_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}
