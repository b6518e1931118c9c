//! Top-level error type of a run.

use thiserror::Error;

use abtest_core::AnalysisError;

use crate::data::DataError;

/// Any failure that aborts an analysis run.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be loaded.
    #[error(transparent)]
    Data(#[from] DataError),

    /// The loaded data could not be analyzed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// The report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
