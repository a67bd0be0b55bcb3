//! gridalign-filter - Grid filtering operations
//!
//! This crate provides the filtering half of the engine:
//!
//! - Generic 2-D convolution with edge-extrapolated source reads and
//!   zero-padded kernels
//! - A fixed catalog of named filters (Gaussian 3/5/7, 3x3 median,
//!   Sobel pair, identity) with literal weight tables
//! - Gradient-based edge extraction with orientation-quantized
//!   non-maximum suppression, histogram reporting, and thresholding

pub mod bank;
pub mod convolve;
pub mod edge;
mod error;
pub mod kernel;
pub mod rank;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use bank::GridFilter;
pub use convolve::convolve;
pub use edge::{EdgeField, HISTOGRAM_BINS, extract_edges, rounded_max, threshold};
pub use rank::median3;
