//! Benchmark setup error type.

use crate::source::SyntheticError;
use sollin_core::SollinError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Configuring the engine failed.
    #[error("engine configuration failed: {0}")]
    Sollin(#[from] SollinError),
}
