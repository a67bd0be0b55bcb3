//! Binary morphological operations
//!
//! Dilation, erosion, opening, and closing over 0/1 label grids, plus
//! the line-end detector used to clean up thresholded edge masks.
//!
//! All boundary reads are zero-padded: outside the grid counts as
//! background. This makes erosion strip foreground touching the border
//! (an active offset reaching outside finds a 0) while dilation never
//! invents foreground there.

use gridalign_core::LabelGrid;

use crate::error::MorphResult;
use crate::mask::StructuringElement;

/// Dilate a binary grid.
///
/// A 0-cell becomes 1 iff some active mask offset lands on a 1-cell;
/// 1-cells are unchanged.
pub fn dilate(label: &LabelGrid, mask: &StructuringElement) -> LabelGrid {
    let mut out = label.clone();
    for x in 0..label.width() as i64 {
        for y in 0..label.height() as i64 {
            if label.get_padded(x, y) != 0 {
                continue;
            }
            let hit = mask
                .active_offsets()
                .any(|(dx, dy)| label.get_padded(x + dx, y + dy) != 0);
            if hit {
                out.set(x as usize, y as usize, 1).expect("in bounds");
            }
        }
    }
    out
}

/// Erode a binary grid.
///
/// A 1-cell becomes 0 iff some active mask offset lands on a 0-cell
/// (out-of-grid reads count as 0); 0-cells are unchanged.
pub fn erode(label: &LabelGrid, mask: &StructuringElement) -> LabelGrid {
    let mut out = label.clone();
    for x in 0..label.width() as i64 {
        for y in 0..label.height() as i64 {
            if label.get_padded(x, y) == 0 {
                continue;
            }
            let miss = mask
                .active_offsets()
                .any(|(dx, dy)| label.get_padded(x + dx, y + dy) == 0);
            if miss {
                out.set(x as usize, y as usize, 0).expect("in bounds");
            }
        }
    }
    out
}

/// Open a binary grid: erosion followed by dilation.
///
/// Removes foreground features smaller than the mask; never adds
/// 1-cells (anti-extensive).
pub fn open(label: &LabelGrid, mask: &StructuringElement) -> LabelGrid {
    let eroded = erode(label, mask);
    dilate(&eroded, mask)
}

/// Close a binary grid: dilation followed by erosion.
///
/// Fills holes smaller than the mask; never removes 1-cells
/// (extensive).
pub fn close(label: &LabelGrid, mask: &StructuringElement) -> LabelGrid {
    let dilated = dilate(label, mask);
    erode(&dilated, mask)
}

/// Mark line-end cells.
///
/// A 1-cell is a line-end iff its full 3x3 neighborhood (itself
/// included) contains at most one active cell, i.e. it has no active
/// 4- or 8-neighbor.
pub fn line_ends(label: &LabelGrid) -> LabelGrid {
    let mut out = LabelGrid::new(label.width(), label.height()).expect("nonzero extents");
    for x in 0..label.width() as i64 {
        for y in 0..label.height() as i64 {
            if label.get_padded(x, y) == 0 {
                continue;
            }
            let mut active = 0;
            for dx in -1..=1 {
                for dy in -1..=1 {
                    if label.get_padded(x + dx, y + dy) != 0 {
                        active += 1;
                    }
                }
            }
            if active <= 1 {
                out.set(x as usize, y as usize, 1).expect("in bounds");
            }
        }
    }
    out
}

/// A basic morphological operation over a square mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphOp {
    Dilate,
    Erode,
    Open,
    Close,
}

impl MorphOp {
    /// Apply the operation with an all-active square mask of odd
    /// `size`.
    ///
    /// # Errors
    ///
    /// Returns `MorphError::EvenMask` for an even or zero size.
    pub fn apply(&self, label: &LabelGrid, size: usize) -> MorphResult<LabelGrid> {
        let mask = StructuringElement::square(size)?;
        Ok(match self {
            MorphOp::Dilate => dilate(label, &mask),
            MorphOp::Erode => erode(label, &mask),
            MorphOp::Open => open(label, &mask),
            MorphOp::Close => close(label, &mask),
        })
    }
}
