//! Optional metrics emitted by the sampler and the sweep driver.
//!
//! With the `metrics` feature enabled the crate emits:
//!
//! - `sweep_trials_total` (counter)
//! - `shortcut_rejections_total` (counter)
//! - `trial_diameter` (histogram)
//!
//! Without the feature every recorder compiles to a no-op.

#[cfg(feature = "metrics")]
pub(crate) fn record_trial(diameter: u32) {
    metrics::counter!("sweep_trials_total").increment(1);
    metrics::histogram!("trial_diameter").record(f64::from(diameter));
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn record_trial(_diameter: u32) {}

#[cfg(feature = "metrics")]
pub(crate) fn record_rejections(rejected: u64) {
    if rejected > 0 {
        metrics::counter!("shortcut_rejections_total").increment(rejected);
    }
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn record_rejections(_rejected: u64) {}
