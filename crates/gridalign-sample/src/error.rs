//! Error types for gridalign-sample

use thiserror::Error;

/// Errors that can occur during grid sampling
#[derive(Debug, Error)]
pub enum SampleError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] gridalign_core::Error),

    /// An axis too short for the requested interpolation order
    #[error("axis has {len} samples but the interpolation needs at least {min}")]
    BadDomainSize { len: usize, min: usize },

    /// Degenerate abscissas during cubic coefficient solving
    #[error("singular interpolation matrix: duplicate abscissas")]
    SingularMatrix,
}

/// Result type for sampling operations
pub type SampleResult<T> = Result<T, SampleError>;
