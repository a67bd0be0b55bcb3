//! Structuring elements for morphological operations
//!
//! A structuring element is an odd-dimensioned 0/1 mask defining the
//! neighborhood of a morphological operation, centered at
//! `(width/2, height/2)` like a convolution kernel.

use crate::error::{MorphError, MorphResult};

/// An odd-dimensioned 0/1 neighborhood mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    width: usize,
    height: usize,
    data: Vec<bool>,
}

impl StructuringElement {
    /// Create an all-active square mask of odd `size`.
    ///
    /// # Errors
    ///
    /// Returns `MorphError::EvenMask` for an even or zero size.
    pub fn square(size: usize) -> MorphResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(MorphError::EvenMask(size));
        }
        Ok(Self {
            width: size,
            height: size,
            data: vec![true; size * size],
        })
    }

    /// Create a mask from a pattern of `'x'` (active) and `'.'`
    /// (inactive) rows; the outer direction is x, matching the grids.
    ///
    /// # Errors
    ///
    /// Returns `MorphError::InvalidPattern` on ragged or empty rows
    /// and `MorphError::EvenMask` on even dimensions.
    pub fn from_pattern(rows: &[&str]) -> MorphResult<Self> {
        let width = rows.len();
        let height = rows.first().map(|r| r.len()).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidPattern("empty pattern".to_string()));
        }
        if width % 2 == 0 {
            return Err(MorphError::EvenMask(width));
        }
        if height % 2 == 0 {
            return Err(MorphError::EvenMask(height));
        }

        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            if row.len() != height {
                return Err(MorphError::InvalidPattern(format!(
                    "ragged row: {} vs {}",
                    row.len(),
                    height
                )));
            }
            for ch in row.chars() {
                match ch {
                    'x' => data.push(true),
                    '.' => data.push(false),
                    other => {
                        return Err(MorphError::InvalidPattern(format!(
                            "unexpected character '{other}'"
                        )));
                    }
                }
            }
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Mask width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Mask height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// X coordinate of the center cell.
    #[inline]
    pub fn center_x(&self) -> usize {
        self.width / 2
    }

    /// Y coordinate of the center cell.
    #[inline]
    pub fn center_y(&self) -> usize {
        self.height / 2
    }

    /// Number of active cells.
    pub fn active_count(&self) -> usize {
        self.data.iter().filter(|&&a| a).count()
    }

    /// Iterate over active positions relative to the center.
    pub fn active_offsets(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        let cx = self.center_x() as i64;
        let cy = self.center_y() as i64;
        let height = self.height;

        self.data
            .iter()
            .enumerate()
            .filter_map(move |(idx, &active)| {
                if active {
                    let x = (idx / height) as i64;
                    let y = (idx % height) as i64;
                    Some((x - cx, y - cy))
                } else {
                    None
                }
            })
    }
}
