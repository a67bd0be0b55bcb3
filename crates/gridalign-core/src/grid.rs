//! Scalar fields on non-uniform rectilinear grids
//!
//! [`ScalarGrid`] pairs a rectangular table of `f64` samples with two
//! strictly increasing coordinate axes. [`NormalizedGrid`] is the
//! unit-scaled variant used by the interpolation and rendering paths:
//! values rescaled to `[0, 1]` plus the `(minimum, amplitude)` pair
//! needed to recover physical units.
//!
//! # Memory layout
//!
//! Samples are stored x-major with no padding: the value at `(ix, iy)`
//! is at index `ix * height + iy`, mirroring the `data[x][y]` contract
//! of the callers.

use crate::axis::Axis;
use crate::error::{Error, Result};

/// A scalar field over a non-uniform rectilinear grid.
///
/// Immutable after construction; operations that derive a new field
/// (convolution, suppression, cropping) build a fresh grid.
///
/// # Examples
///
/// ```
/// use gridalign_core::{Axis, ScalarGrid};
///
/// let xs = Axis::new(vec![0.0, 1.0, 2.0]).unwrap();
/// let ys = Axis::new(vec![0.0, 1.0]).unwrap();
/// let grid = ScalarGrid::from_values(xs, ys, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.value(1, 0), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarGrid {
    xs: Axis,
    ys: Axis,
    data: Vec<f64>,
}

impl ScalarGrid {
    /// Create a grid from axes and x-major sample data.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` unless
    /// `data.len() == xs.len() * ys.len()`.
    pub fn from_values(xs: Axis, ys: Axis, data: Vec<f64>) -> Result<Self> {
        let expected = xs.len() * ys.len();
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { xs, ys, data })
    }

    /// Create a grid with every sample set to `value`.
    pub fn filled(xs: Axis, ys: Axis, value: f64) -> Self {
        let data = vec![value; xs.len() * ys.len()];
        Self { xs, ys, data }
    }

    /// Grid extent along x (number of columns).
    #[inline]
    pub fn width(&self) -> usize {
        self.xs.len()
    }

    /// Grid extent along y (number of rows).
    #[inline]
    pub fn height(&self) -> usize {
        self.ys.len()
    }

    /// The x coordinate axis.
    #[inline]
    pub fn xs(&self) -> &Axis {
        &self.xs
    }

    /// The y coordinate axis.
    #[inline]
    pub fn ys(&self) -> &Axis {
        &self.ys
    }

    /// Sample at `(ix, iy)`, or `None` out of range.
    #[inline]
    pub fn get(&self, ix: usize, iy: usize) -> Option<f64> {
        if ix < self.width() && iy < self.height() {
            Some(self.data[ix * self.height() + iy])
        } else {
            None
        }
    }

    /// Sample at `(ix, iy)`. Panics out of range.
    #[inline]
    pub fn value(&self, ix: usize, iy: usize) -> f64 {
        debug_assert!(ix < self.width() && iy < self.height());
        self.data[ix * self.height() + iy]
    }

    /// The samples as an x-major slice.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Minimum and maximum over all finite samples.
    ///
    /// Returns `None` when the grid holds no finite value.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for &v in &self.data {
            if !v.is_finite() {
                continue;
            }
            bounds = Some(match bounds {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
        bounds
    }

    /// Extract the subgrid covering `[x0, x1) x [y0, y1)` in index space.
    ///
    /// The axes are sliced along with the data, so the subgrid keeps its
    /// physical coordinates.
    pub fn crop(&self, x0: usize, x1: usize, y0: usize, y1: usize) -> Result<ScalarGrid> {
        let xs = self.xs.slice(x0, x1)?;
        let ys = self.ys.slice(y0, y1)?;
        let mut data = Vec::with_capacity(xs.len() * ys.len());
        for ix in x0..x1 {
            for iy in y0..y1 {
                data.push(self.value(ix, iy));
            }
        }
        Ok(ScalarGrid { xs, ys, data })
    }

    /// Rebuild this grid with the same axes and new sample data.
    pub fn with_values(&self, data: Vec<f64>) -> Result<ScalarGrid> {
        ScalarGrid::from_values(self.xs.clone(), self.ys.clone(), data)
    }
}

/// A scalar field rescaled to `[0, 1]`.
///
/// `physical = scaled * amplitude + minimum`. The amplitude is
/// `max - min` of the source field, forced to 1 when that span is zero
/// or non-finite so the inverse mapping stays total.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedGrid {
    grid: ScalarGrid,
    minimum: f64,
    amplitude: f64,
}

impl NormalizedGrid {
    /// Rescale a physical-unit field to `[0, 1]`.
    pub fn from_physical(source: &ScalarGrid) -> Self {
        let (minimum, amplitude) = match source.min_max() {
            Some((lo, hi)) => {
                let span = hi - lo;
                if span > 0.0 && span.is_finite() {
                    (lo, span)
                } else {
                    (lo, 1.0)
                }
            }
            None => (0.0, 1.0),
        };
        let data = source
            .values()
            .iter()
            .map(|&v| (v - minimum) / amplitude)
            .collect();
        let grid = ScalarGrid {
            xs: source.xs.clone(),
            ys: source.ys.clone(),
            data,
        };
        Self {
            grid,
            minimum,
            amplitude,
        }
    }

    /// Wrap an already unit-scaled grid with its recovery parameters.
    pub fn from_parts(grid: ScalarGrid, minimum: f64, amplitude: f64) -> Self {
        let amplitude = if amplitude.is_finite() && amplitude != 0.0 {
            amplitude
        } else {
            1.0
        };
        Self {
            grid,
            minimum,
            amplitude,
        }
    }

    /// The unit-scaled field.
    #[inline]
    pub fn grid(&self) -> &ScalarGrid {
        &self.grid
    }

    /// Physical value of the smallest source sample.
    #[inline]
    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Physical span of the source samples (never zero).
    #[inline]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Map a scaled value back to physical units.
    #[inline]
    pub fn to_physical(&self, scaled: f64) -> f64 {
        scaled * self.amplitude + self.minimum
    }
}
