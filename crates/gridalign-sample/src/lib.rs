//! gridalign-sample - Grid resampling
//!
//! This crate resamples scalar fields defined on non-uniform
//! rectilinear grids at arbitrary query coordinates:
//!
//! - Nearest-neighbor, bilinear, and bicubic interpolation
//! - Closed-form cubic fits through four points (no iterative solves)
//! - Flat extrapolation outside the stored axes
//! - NaN degradation for recoverable interpolation failures

pub mod cubic;
mod error;
pub mod sampler;

pub use cubic::Cubic;
pub use error::{SampleError, SampleResult};
pub use sampler::{SampleMode, sample, sample_or_nan, sample_physical, sample_scaled};
