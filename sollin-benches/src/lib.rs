//! Benchmark support crate for sollin.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks that sweep worker counts over the engine.

pub mod error;
pub mod params;
pub mod source;
