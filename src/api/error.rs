// ==========================================
// DOI Dashboard - API Layer Error Types
// ==========================================
// User-facing failures of the report API. Per-logic load failures
// are NOT errors here; they ride along in the load report so three
// good files still make a session.
// ==========================================

use crate::importer::error::ImportError;
use thiserror::Error;

/// API-layer error type.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A required reference table (distance or frequency) failed to
    /// load; the session cannot be built without it.
    #[error("reference table load failed: {0}")]
    ReferenceLoad(#[from] ImportError),

    /// All four logic exports failed; there is nothing to report on.
    #[error("no logic export could be loaded")]
    NoDataLoaded,

    #[error("export failed: {0}")]
    ExportError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

/// Result alias for the API layer.
pub type ApiResult<T> = Result<T, ApiError>;
