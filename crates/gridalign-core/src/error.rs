//! Error types for gridalign-core
//!
//! Provides a unified error type for construction and indexing of the
//! core data structures. Each variant captures enough context for
//! diagnostics without exposing internal implementation details.

use thiserror::Error;

/// gridalign-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// An axis with no samples
    #[error("empty coordinate axis")]
    EmptyAxis,

    /// Axis coordinates not strictly increasing
    #[error("axis not strictly increasing at index {index}")]
    AxisNotIncreasing { index: usize },

    /// Grid data length does not match the axis extents
    #[error("dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
