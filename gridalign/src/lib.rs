//! gridalign - Numeric grid-processing engine
//!
//! The engine behind an interactive tool for overlaying and aligning
//! two 2-D imaging modalities. Every rendering and export path calls
//! into this workspace:
//!
//! - Resampling a scalar field on a non-uniform rectilinear grid
//!   (nearest-neighbor, bilinear, bicubic)
//! - Generic 2-D convolution with boundary extrapolation
//! - Gradient-based edge extraction with non-maximum suppression and
//!   histogram reporting
//! - Binary morphology and connected-region flood fill over 0/1 grids
//!
//! The engine is single-threaded, synchronous, and purely functional
//! over grids: operations take input grids and return new grids or
//! scalars, with no shared mutable state.
//!
//! # Example
//!
//! ```
//! use gridalign::{Axis, ScalarGrid};
//! use gridalign::sample::{SampleMode, sample};
//!
//! let xs = Axis::new(vec![0.0, 1.0, 2.0]).unwrap();
//! let ys = Axis::new(vec![0.0, 1.0]).unwrap();
//! let grid = ScalarGrid::from_values(xs, ys, vec![0.0, 0.0, 1.0, 1.0, 2.0, 2.0]).unwrap();
//! let v = sample(&grid, 0.5, 0.5, SampleMode::Bilinear).unwrap();
//! assert!((v - 0.5).abs() < 1e-12);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use gridalign_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use gridalign_filter as filter;
pub use gridalign_io as io;
pub use gridalign_morph as morph;
pub use gridalign_region as region;
pub use gridalign_sample as sample;
