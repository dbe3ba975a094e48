//! Unit tests for the sweep driver.

use proptest::prelude::*;
use rand::{RngCore, SeedableRng, rngs::SmallRng};
use rstest::rstest;
use smallring_test_support::tracing::with_recording;
use tracing::Level;

use crate::{SweepError, test_utils::suite_proptest_config};

use super::*;

/// Seeds every trial from its trial number alone, so trial `t` replays the
/// same draws at every shortcut count.
struct PerTrialIndex(u64);

impl TrialRngFactory for PerTrialIndex {
    type Rng = SmallRng;

    fn rng_for(&self, id: TrialId) -> SmallRng {
        SmallRng::seed_from_u64(self.0.wrapping_add(id.trial as u64))
    }
}

/// A generator stuck at zero; every pair it proposes is ring-adjacent.
struct StuckRng;

impl RngCore for StuckRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        dest.fill(0);
        Ok(())
    }
}

struct Stuck;

impl TrialRngFactory for Stuck {
    type Rng = StuckRng;

    fn rng_for(&self, _id: TrialId) -> StuckRng {
        StuckRng
    }
}

fn driver(
    node_count: usize,
    counts: &[usize],
    trials: usize,
    strategy: ExecutionStrategy,
) -> SweepDriver {
    SweepBuilder::new()
        .with_node_count(node_count)
        .with_shortcut_counts(counts.iter().copied())
        .with_trials_per_count(trials)
        .with_seed(2024)
        .with_execution_strategy(strategy)
        .build()
        .expect("configuration must be valid")
}

fn means(result: &SweepResult) -> Vec<f64> {
    result.iter().map(SweepPoint::mean_diameter).collect()
}

#[cfg(feature = "parallel")]
const STRATEGIES: [ExecutionStrategy; 3] = [
    ExecutionStrategy::Auto,
    ExecutionStrategy::Sequential,
    ExecutionStrategy::Parallel,
];

#[cfg(not(feature = "parallel"))]
const STRATEGIES: [ExecutionStrategy; 2] = [ExecutionStrategy::Auto, ExecutionStrategy::Sequential];

#[test]
fn ten_ring_sweep_with_replayed_trial_seeds() {
    for strategy in STRATEGIES {
        let result = driver(10, &[0, 1, 2], 5, strategy)
            .run_with(&PerTrialIndex(77))
            .expect("sweep must succeed");
        let means = means(&result);
        assert_eq!(means.len(), 3);
        assert_eq!(means[0], 5.0);
        assert!(
            means.windows(2).all(|pair| pair[1] <= pair[0]),
            "means must not increase: {means:?}"
        );
        let counts: Vec<_> = result.iter().map(SweepPoint::shortcut_count).collect();
        assert_eq!(counts, vec![0, 1, 2]);
        assert!(result.iter().all(|point| point.trials() == 5));
    }
}

#[test]
fn fixed_seed_reproduces_the_sweep() {
    let first = driver(24, &[0, 3, 8], 6, ExecutionStrategy::Auto)
        .run()
        .expect("sweep must succeed");
    let second = driver(24, &[0, 3, 8], 6, ExecutionStrategy::Auto)
        .run()
        .expect("sweep must succeed");
    assert_eq!(first, second);
    assert_eq!(first.seed(), 2024);
    assert_eq!(first.node_count(), 24);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_and_sequential_sweeps_agree() {
    let counts = [0, 2, 4, 8, 16, 32];
    let sequential = driver(40, &counts, 7, ExecutionStrategy::Sequential)
        .run()
        .expect("sequential sweep must succeed");
    let parallel = driver(40, &counts, 7, ExecutionStrategy::Parallel)
        .run()
        .expect("parallel sweep must succeed");
    assert_eq!(sequential, parallel);
}

#[cfg(not(feature = "parallel"))]
#[test]
fn parallel_strategy_requires_the_parallel_feature() {
    let err = driver(10, &[0], 1, ExecutionStrategy::Parallel)
        .run()
        .expect_err("parallel backend is not compiled in");
    assert_eq!(
        err,
        SweepError::BackendUnavailable {
            requested: ExecutionStrategy::Parallel,
        }
    );
}

#[test]
fn counts_keep_input_order() {
    let result = driver(16, &[6, 0, 6, 2], 3, ExecutionStrategy::Auto)
        .run()
        .expect("sweep must succeed");
    let counts: Vec<_> = result.iter().map(SweepPoint::shortcut_count).collect();
    assert_eq!(counts, vec![6, 0, 6, 2]);
    assert_eq!(result.points()[1].mean_diameter(), 8.0);
}

#[test]
fn saturated_ring_becomes_complete() {
    let result = driver(6, &[9], 2, ExecutionStrategy::Auto)
        .run()
        .expect("every eligible pair can be chosen");
    assert_eq!(result.points()[0].mean_diameter(), 1.0);
}

#[test]
fn empty_count_list_yields_empty_result() {
    let result = driver(8, &[], 4, ExecutionStrategy::Auto)
        .run()
        .expect("nothing to run");
    assert!(result.is_empty());
}

#[rstest]
#[case::small_ring(2, vec![0], 1, SweepError::InvalidSize { got: 2 })]
#[case::size_checked_first(0, vec![50], 0, SweepError::InvalidSize { got: 0 })]
#[case::too_many_shortcuts(
    10,
    vec![0, 36, 40],
    1,
    SweepError::InvalidShortcutCount { requested: 36, available: 35 },
)]
#[case::triangle_shortcut(
    3,
    vec![1],
    1,
    SweepError::InvalidShortcutCount { requested: 1, available: 0 },
)]
#[case::zero_trials(10, vec![0], 0, SweepError::InvalidTrialCount { got: 0 })]
fn builder_rejects_invalid_configuration(
    #[case] node_count: usize,
    #[case] counts: Vec<usize>,
    #[case] trials: usize,
    #[case] expected: SweepError,
) {
    let err = SweepBuilder::new()
        .with_node_count(node_count)
        .with_shortcut_counts(counts)
        .with_trials_per_count(trials)
        .build()
        .expect_err("configuration must be rejected");
    assert_eq!(err, expected);
}

#[test]
fn huge_rings_validate_without_overflow() {
    let config = SweepBuilder::new()
        .with_node_count(usize::MAX)
        .with_shortcut_counts(vec![0, usize::MAX])
        .with_trials_per_count(1)
        .build_config()
        .expect("every count fits a saturated pair total");
    assert_eq!(config.node_count(), usize::MAX);
}

#[test]
fn run_sweep_validates_like_the_builder() {
    assert_eq!(
        run_sweep(10, [0], 0).expect_err("zero trials"),
        SweepError::InvalidTrialCount { got: 0 }
    );
    let result = run_sweep(10, [0, 3], 2).expect("sweep must succeed");
    assert_eq!(result.points()[0].mean_diameter(), 5.0);
}

#[test]
fn builder_without_seed_draws_one() {
    let config = SweepBuilder::new()
        .with_node_count(5)
        .with_shortcut_counts([0])
        .build_config()
        .expect("configuration must be valid");
    let replay = SweepBuilder::new()
        .with_node_count(5)
        .with_shortcut_counts([0])
        .with_seed(config.seed())
        .build_config()
        .expect("configuration must be valid");
    assert_eq!(config, replay);
    assert_eq!(config.total_trials(), DEFAULT_TRIALS_PER_COUNT);
}

#[test]
fn trial_failure_aborts_the_sweep() {
    let err = driver(10, &[0, 1], 2, ExecutionStrategy::Sequential)
        .run_with(&Stuck)
        .expect_err("a stuck generator never finds a shortcut");
    assert_eq!(
        err,
        SweepError::SamplingExhausted {
            requested: 1,
            accepted: 0,
            attempts: 128,
        }
    );
}

#[test]
fn sweep_records_span_and_events() {
    let sweep = driver(10, &[0, 1, 2], 5, ExecutionStrategy::Sequential);
    let (result, layer) = with_recording(|| sweep.run());
    result.expect("sweep must succeed");

    let spans = layer.spans_named("core.sweep");
    let span = spans.first().expect("core.sweep span must exist");
    assert_eq!(span.field("node_count"), Some("10"));
    assert_eq!(span.field("counts"), Some("3"));
    assert_eq!(span.field("trials_per_count"), Some("5"));
    assert_eq!(span.field("seed"), Some("2024"));
    assert_eq!(span.field("strategy"), Some("Sequential"));
    assert_eq!(span.field("backend"), Some("sequential"));

    let completed = layer.events_with_message("sweep completed");
    let event = completed.first().expect("completion event must exist");
    assert_eq!(event.level, Level::INFO);
    assert_eq!(event.field("points"), Some("3"));
    assert_eq!(event.field("trials"), Some("15"));
    assert_eq!(layer.events_with_message("shortcut count aggregated").len(), 3);
}

#[test]
fn failed_sweep_records_error_on_span() {
    let sweep = driver(10, &[1], 1, ExecutionStrategy::Sequential);
    let (result, layer) = with_recording(|| sweep.run_with(&Stuck));
    assert!(result.is_err());
    assert!(layer.events().iter().any(|event| event.level == Level::ERROR));
}

#[test]
fn independent_trials_stay_below_the_bare_ring() {
    let counts: Vec<usize> = (0..=30).step_by(5).collect();
    let result = driver(30, &counts, 30, ExecutionStrategy::Auto)
        .run()
        .expect("sweep must succeed");
    let means = means(&result);
    assert_eq!(means[0], 15.0);
    assert!(means.iter().all(|&mean| mean <= 15.0));
    assert!(means.last().is_some_and(|&mean| mean < 15.0));
    assert!(result.iter().all(|point| point.max_diameter() <= 15));
}

proptest! {
    #![proptest_config(suite_proptest_config(32))]

    #[test]
    fn mean_diameter_does_not_rise_five_shortcuts_later(
        n in 10_usize..32,
        k in 0_usize..=4,
        seed in any::<u64>(),
    ) {
        let result = driver(n, &[k, k + 5], 12, ExecutionStrategy::Auto)
            .run_with(&PerTrialIndex(seed));
        prop_assert!(result.is_ok(), "sweep failed: {:?}", result);
        let means = result.map(|r| means(&r)).unwrap_or_default();
        prop_assert!(
            means[1] <= means[0] + 1e-9,
            "mean at k={} is {} but at k+5 is {}",
            k,
            means[0],
            means[1]
        );
    }
}
