//! Error types for the colgrid library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for colgrid operations.
#[derive(Debug, Error)]
pub enum ColgridError {
    /// Two sibling columns share the same key.
    #[error("Duplicate column key '{key}' under '{parent}'")]
    DuplicateKey { parent: String, key: String },

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

    /// Invalid delimiter detected or specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Empty file or no rows to load.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for colgrid operations.
pub type Result<T> = std::result::Result<T, ColgridError>;
