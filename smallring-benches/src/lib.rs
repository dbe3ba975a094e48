//! Benchmark support crate for smallring.
//!
//! Provides seeded graph fixtures and parameter types used by the Criterion
//! benchmarks for the distance oracle and the shortcut sweep.

pub mod error;
pub mod fixture;
pub mod params;
