//! Random shortcut sampling.
//!
//! Shortcuts are drawn by rejection: pick a uniform pair of distinct nodes and
//! discard it when the ring already joins the pair or when it was accepted
//! before. The loop is bounded in three ways:
//!
//! - requests larger than the number of eligible pairs fail before any draw,
//! - requests for more than half of the eligible pairs switch to choosing a
//!   uniform subset of the enumerated eligible pairs, where rejection would
//!   spend most draws on duplicates,
//! - the rejection loop stops after an attempt budget and reports
//!   [`SweepError::SamplingExhausted`].
//!
//! Both strategies yield a uniformly random `k`-subset of the eligible pairs.

use rand::{Rng, seq::index};

use crate::{
    Result, error::SweepError, ring::Edge, ring::RingGraph, shortcuts::ShortcutSet, telemetry,
};

/// Draw budget per requested shortcut before the rejection loop gives up.
pub const DEFAULT_ATTEMPTS_PER_SHORTCUT: usize = 64;

/// Samples shortcut sets for a fixed ring.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use smallring_core::{RingGraph, ShortcutSampler};
///
/// let ring = RingGraph::build(12).expect("valid ring");
/// let mut rng = SmallRng::seed_from_u64(7);
/// let shortcuts = ShortcutSampler::new(&ring)
///     .sample(4, &mut rng)
///     .expect("four shortcuts fit on a 12-ring");
/// assert_eq!(shortcuts.len(), 4);
/// assert!(shortcuts.iter().all(|e| !ring.is_ring_adjacent(e.low(), e.high())));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ShortcutSampler<'a> {
    ring: &'a RingGraph,
    max_attempts: Option<usize>,
}

impl<'a> ShortcutSampler<'a> {
    /// Creates a sampler with the default attempt budget.
    #[must_use]
    pub fn new(ring: &'a RingGraph) -> Self {
        Self {
            ring,
            max_attempts: None,
        }
    }

    /// Caps the number of candidate pairs drawn by the rejection loop.
    #[must_use]
    pub fn with_max_attempts(mut self, limit: usize) -> Self {
        self.max_attempts = Some(limit);
        self
    }

    /// Returns the ring this sampler draws shortcuts for.
    #[must_use]
    #[rustfmt::skip]
    pub fn ring(&self) -> &'a RingGraph { self.ring }

    /// Draws `k` distinct, non-ring-adjacent shortcuts.
    ///
    /// # Errors
    /// Returns [`SweepError::SamplingExhausted`] when `k` exceeds the number
    /// of eligible pairs or when the attempt budget runs out.
    pub fn sample<R: Rng + ?Sized>(&self, k: usize, rng: &mut R) -> Result<ShortcutSet> {
        let ring = self.ring;
        let plan = SamplingPlan {
            node_count: ring.node_count(),
            requested: k,
            eligible: ring.eligible_shortcut_count(),
            max_attempts: self.max_attempts.unwrap_or_else(|| default_budget(k)),
        };
        plan.run(|a, b| ring.is_ring_adjacent(a, b), rng)
    }
}

/// Draws `k` shortcuts for `node_count` nodes, rejecting pairs for which
/// `is_ring_adjacent` holds.
///
/// The predicate is arbitrary, so the eligible pairs are counted once before
/// sampling. It is always called as `(low, high)` with `low < high`. Prefer
/// [`ShortcutSampler`] when the topology is a [`RingGraph`].
///
/// # Errors
/// Returns [`SweepError::SamplingExhausted`] when fewer than `k` pairs are
/// eligible or when the default attempt budget runs out.
pub fn sample_shortcuts<F, R>(
    node_count: usize,
    k: usize,
    is_ring_adjacent: F,
    rng: &mut R,
) -> Result<ShortcutSet>
where
    F: Fn(usize, usize) -> bool,
    R: Rng + ?Sized,
{
    let eligible = eligible_pairs(node_count, &is_ring_adjacent).count();
    let plan = SamplingPlan {
        node_count,
        requested: k,
        eligible,
        max_attempts: default_budget(k),
    };
    plan.run(is_ring_adjacent, rng)
}

fn default_budget(k: usize) -> usize {
    DEFAULT_ATTEMPTS_PER_SHORTCUT.saturating_mul(k.saturating_add(1))
}

fn eligible_pairs<F>(node_count: usize, is_ring_adjacent: &F) -> impl Iterator<Item = Edge> + '_
where
    F: Fn(usize, usize) -> bool,
{
    (0..node_count).flat_map(move |low| {
        (low + 1..node_count)
            .filter(move |&high| !is_ring_adjacent(low, high))
            .map(move |high| Edge::ordered(low, high))
    })
}

struct SamplingPlan {
    node_count: usize,
    requested: usize,
    eligible: usize,
    max_attempts: usize,
}

impl SamplingPlan {
    fn run<F, R>(&self, is_ring_adjacent: F, rng: &mut R) -> Result<ShortcutSet>
    where
        F: Fn(usize, usize) -> bool,
        R: Rng + ?Sized,
    {
        if self.requested == 0 {
            return Ok(ShortcutSet::new());
        }
        if self.requested > self.eligible {
            return Err(SweepError::SamplingExhausted {
                requested: self.requested,
                accepted: 0,
                attempts: 0,
            });
        }
        if self.requested.saturating_mul(2) > self.eligible {
            Ok(self.choose_from_enumeration(&is_ring_adjacent, rng))
        } else {
            self.reject_until_filled(&is_ring_adjacent, rng)
        }
    }

    fn reject_until_filled<F, R>(&self, is_ring_adjacent: &F, rng: &mut R) -> Result<ShortcutSet>
    where
        F: Fn(usize, usize) -> bool,
        R: Rng + ?Sized,
    {
        let n = self.node_count;
        let mut shortcuts = ShortcutSet::new();
        let mut attempts = 0_usize;
        let mut rejected = 0_u64;

        while shortcuts.len() < self.requested {
            if attempts == self.max_attempts {
                telemetry::record_rejections(rejected);
                return Err(SweepError::SamplingExhausted {
                    requested: self.requested,
                    accepted: shortcuts.len(),
                    attempts,
                });
            }
            attempts += 1;

            let a = rng.gen_range(0..n);
            let mut b = rng.gen_range(0..n - 1);
            if b >= a {
                b += 1;
            }
            let (low, high) = (a.min(b), a.max(b));
            if is_ring_adjacent(low, high) {
                rejected += 1;
                continue;
            }
            let edge = Edge::ordered(low, high);
            if !shortcuts.insert_unchecked(edge) {
                rejected += 1;
            }
        }

        telemetry::record_rejections(rejected);
        Ok(shortcuts)
    }

    fn choose_from_enumeration<F, R>(&self, is_ring_adjacent: &F, rng: &mut R) -> ShortcutSet
    where
        F: Fn(usize, usize) -> bool,
        R: Rng + ?Sized,
    {
        let pairs: Vec<Edge> = eligible_pairs(self.node_count, is_ring_adjacent).collect();
        let mut shortcuts = ShortcutSet::new();
        for position in index::sample(rng, pairs.len(), self.requested) {
            if let Some(edge) = pairs.get(position) {
                shortcuts.insert_unchecked(*edge);
            }
        }
        shortcuts
    }
}
