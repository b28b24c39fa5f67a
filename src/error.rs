use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by ingestion functions.
///
/// Queries in [`crate::processing`] never fail; every error in this crate originates at the
/// boundary where JSON becomes a [`crate::types::DataSet`].
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not have the expected top-level shape.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A single record could not be turned into a [`crate::types::Record`].
    #[error("invalid record {record}: {message}")]
    InvalidRecord { record: usize, message: String },

    /// The ingestion format could not be inferred from the path.
    #[error("unsupported format for path '{}'", path.display())]
    UnsupportedFormat { path: PathBuf },
}
