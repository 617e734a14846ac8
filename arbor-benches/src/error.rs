//! Benchmark setup error type.

use arbor_core::{DistanceError, MstError};

use crate::source::SyntheticError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic point generation failed.
    #[error("synthetic point generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Building the distance graph failed.
    #[error("distance graph construction failed: {0}")]
    Distance(#[from] DistanceError),
    /// Tree construction failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
}
