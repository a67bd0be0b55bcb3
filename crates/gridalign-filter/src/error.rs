//! Error types for gridalign-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] gridalign_core::Error),

    /// Kernels must be odd in both dimensions to have a center cell
    #[error("kernel dimensions must be odd: {width}x{height}")]
    EvenKernel { width: usize, height: usize },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
