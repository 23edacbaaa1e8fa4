// ==========================================
// DOI Dashboard - Importer Error Types
// ==========================================
// thiserror derive; only file-level failures surface to the
// caller, cell-level coercion resolves to defaults instead
// ==========================================

use crate::domain::types::LogicVariant;
use thiserror::Error;

/// Import-layer error type.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== file errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (only .csv is accepted)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("CSV parse failed: {0}")]
    CsvParseError(String),

    // ===== schema errors =====
    #[error("schema validation failed for {source_name}: missing required columns {missing:?}")]
    MissingColumns {
        source_name: String,
        missing: Vec<String>,
    },

    #[error("source {logic} could not be loaded: {message}")]
    LogicSourceFailed {
        logic: LogicVariant,
        message: String,
    },

    // ===== generic =====
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result alias for the import layer.
pub type ImportResult<T> = Result<T, ImportError>;
