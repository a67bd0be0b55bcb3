//! Error types for gridalign-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] gridalign_core::Error),

    /// Structuring elements must be odd-sized to have a center cell
    #[error("structuring element size must be odd: {0}")]
    EvenMask(usize),

    /// Mask pattern rows of unequal length or empty
    #[error("invalid mask pattern: {0}")]
    InvalidPattern(String),
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
