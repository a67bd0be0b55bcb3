//! Error types for gridalign-region

use thiserror::Error;

/// Errors that can occur during region operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] gridalign_core::Error),

    /// Invalid seed position
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: usize, y: usize },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
