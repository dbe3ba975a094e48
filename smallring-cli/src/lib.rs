//! Support library for the `smallring` binary.
//!
//! Exposes the command pipeline and logging setup so doctests and unit tests
//! can drive commands without spawning a process.

pub mod cli;
pub mod logging;
