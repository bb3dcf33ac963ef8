//! Error types for the Cyclewise library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Cyclewise operations.
#[derive(Debug, Error)]
pub enum CyclewiseError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Uploaded bytes are not valid UTF-8.
    #[error("Unsupported encoding: {0}")]
    Encoding(String),

    /// Columns of a table do not share one row count.
    #[error("Inconsistent table shape: {0}")]
    Shape(String),

    /// No header or no columns at all.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// The file has a header but zero data rows.
    #[error("The uploaded dataset has no data rows")]
    EmptyDataset,

    /// No dataset has been uploaded in this session.
    #[error("Please upload a CSV file.")]
    MissingInput,

    /// A user metric is outside its allowed range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    InvalidMetric {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CyclewiseError {
    /// Whether this error should be shown as a warning rather than a failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, CyclewiseError::MissingInput)
    }
}

/// Result type alias for Cyclewise operations.
pub type Result<T> = std::result::Result<T, CyclewiseError>;
