//! Error types for gridalign-io

use thiserror::Error;

/// Errors that can occur during grid ingestion
#[derive(Debug, Error)]
pub enum IoError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] gridalign_core::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Row count does not match the deduplicated axis extents
    #[error("improper formatting: expected {expected} data rows, found {found}")]
    ImproperFormatting { expected: usize, found: usize },

    /// A data line that is not an `x,y,value` record
    #[error("bad record on line {line}: {text}")]
    BadRecord { line: usize, text: String },
}

/// Result type for ingestion operations
pub type IoResult<T> = Result<T, IoError>;
