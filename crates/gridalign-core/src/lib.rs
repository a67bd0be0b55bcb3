//! gridalign Core - Basic data structures for grid processing
//!
//! This crate provides the fundamental data structures used throughout
//! the gridalign grid-processing engine:
//!
//! - [`Axis`] - A strictly increasing coordinate axis with binary search
//! - [`ScalarGrid`] / [`NormalizedGrid`] - Scalar fields on non-uniform
//!   rectilinear grids (physical / unit-scaled)
//! - [`LabelGrid`] - Binary 0/1 grids for masks and selections
//! - [`Histogram`] - Equal-width histograms with raw extrema

pub mod axis;
pub mod error;
pub mod grid;
pub mod histogram;
pub mod label;

pub use axis::Axis;
pub use error::{Error, Result};
pub use grid::{NormalizedGrid, ScalarGrid};
pub use histogram::Histogram;
pub use label::LabelGrid;
