//! gridalign-morph - Binary morphology for label grids
//!
//! This crate provides morphological operations over 0/1 label grids:
//!
//! - Structuring elements (odd-dimensioned 0/1 masks)
//! - Dilation, erosion, opening, closing with zero-padded boundaries
//! - Line-end detection for cleaning up thresholded edge masks

pub mod binary;
mod error;
pub mod mask;

pub use error::{MorphError, MorphResult};
pub use mask::StructuringElement;

// Re-export the binary morphology surface
pub use binary::{MorphOp, close, dilate, erode, line_ends, open};
