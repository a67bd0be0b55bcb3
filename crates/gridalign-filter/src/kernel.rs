//! Convolution kernels
//!
//! A [`Kernel`] is an odd-dimensioned weight matrix conceptually
//! centered at `(width/2, height/2)`. Smoothing kernels are normalized
//! to unit sum; gradient kernels are not. Kernels are immutable: the
//! catalog in [`crate::bank`] builds them from compile-time literal
//! tables.

use crate::error::{FilterError, FilterResult};

/// A 2D convolution kernel.
///
/// Weights are stored x-major like the grids they convolve: the weight
/// at `(kx, ky)` is at index `kx * height + ky`.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from x-major weights.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::EvenKernel` unless both dimensions are
    /// odd, and a core dimension error on a length mismatch.
    pub fn new(width: usize, height: usize, data: Vec<f64>) -> FilterResult<Self> {
        if width % 2 == 0 || height % 2 == 0 {
            return Err(FilterError::EvenKernel { width, height });
        }
        if data.len() != width * height {
            return Err(gridalign_core::Error::DimensionMismatch {
                expected: width * height,
                actual: data.len(),
            }
            .into());
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a kernel from a literal 2D table, outer index along x.
    pub fn from_rows<const W: usize, const H: usize>(rows: &[[f64; H]; W]) -> FilterResult<Self> {
        let mut data = Vec::with_capacity(W * H);
        for row in rows {
            data.extend_from_slice(row);
        }
        Self::new(W, H, data)
    }

    /// The 1x1 identity kernel.
    pub fn identity() -> Self {
        Self {
            width: 1,
            height: 1,
            data: vec![1.0],
        }
    }

    /// Kernel width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Kernel height.
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

    /// Weight at `(kx, ky)`; zero outside the kernel's extent
    /// (kernels have finite support).
    #[inline]
    pub fn get(&self, kx: i64, ky: i64) -> f64 {
        if kx < 0 || ky < 0 || kx as usize >= self.width || ky as usize >= self.height {
            0.0
        } else {
            self.data[kx as usize * self.height + ky as usize]
        }
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_even_dimensions() {
        assert!(matches!(
            Kernel::new(2, 3, vec![0.0; 6]),
            Err(FilterError::EvenKernel {
                width: 2,
                height: 3
            })
        ));
        assert!(Kernel::new(3, 3, vec![0.0; 8]).is_err());
    }

    #[test]
    fn test_zero_padding_outside_extent() {
        let k = Kernel::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
        assert_eq!(k.center_x(), 1);
        assert_eq!(k.center_y(), 1);
        assert_eq!(k.get(0, 2), 3.0);
        assert_eq!(k.get(2, 0), 7.0);
        assert_eq!(k.get(-1, 0), 0.0);
        assert_eq!(k.get(0, 3), 0.0);
        assert_eq!(k.sum(), 45.0);
    }
}
