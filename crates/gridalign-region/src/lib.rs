//! gridalign-region - Region processing for label grids
//!
//! This crate provides region-level operations:
//!
//! - **Flood fill** - 4-connected, iterative over an explicit stack
//! - **Region labeling** - numbering of 4-connected foreground
//!   regions with per-region sizes

pub mod error;
pub mod label;
pub mod seedfill;

pub use error::{RegionError, RegionResult};
pub use label::{RegionLabels, label_regions};
pub use seedfill::flood_fill;
