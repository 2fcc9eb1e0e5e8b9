//! Error types for the chatter library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for chatter operations.
#[derive(Debug, Error)]
pub enum ChatterError {
    /// Error opening, reading, or writing a backing file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library (malformed row, bad header, etc.).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column was present but empty in a data row.
    #[error("row {row}: required field '{field}' is missing or empty")]
    MissingField { row: usize, field: &'static str },

    /// Attempt to add a record under a key that already exists.
    #[error("duplicate id '{0}'")]
    DuplicateId(String),

    /// Attempt to modify or delete a record that does not exist.
    #[error("unknown id '{0}'")]
    UnknownId(String),
}

/// Result type alias for chatter operations.
pub type Result<T> = std::result::Result<T, ChatterError>;
