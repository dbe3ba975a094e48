//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of calling
//! `.expect()` inside Criterion callbacks.

use smallring_core::SweepError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Ring construction, shortcut sampling or sweep validation failed.
    #[error("sweep setup failed: {0}")]
    Sweep(#[from] SweepError),
}
