//! The fixed catalog of named filters
//!
//! A closed set of kernel identifiers with literal weight tables: no
//! runtime kernel synthesis and no virtual dispatch for a catalog this
//! small. Gaussian tables are separable products truncated at 3σ
//! (σ = (N-1)/6) and normalized to unit sum; the Sobel pair is
//! unnormalized.

use gridalign_core::ScalarGrid;

use crate::convolve::convolve;
use crate::kernel::Kernel;
use crate::rank::median3;

const GAUSS3: [[f64; 3]; 3] = [
    [
        1.18103459879474729e-4,
        1.06313346550165888e-2,
        1.18103459879474729e-4,
    ],
    [
        1.06313346550165888e-2,
        9.57002247540415962e-1,
        1.06313346550165888e-2,
    ],
    [
        1.18103459879474729e-4,
        1.06313346550165888e-2,
        1.18103459879474729e-4,
    ],
];

const GAUSS5: [[f64; 5]; 5] = [
    [
        4.41697546360726284e-5,
        1.29082944403210434e-3,
        3.97603460258718223e-3,
        1.29082944403210434e-3,
        4.41697546360726284e-5,
    ],
    [
        1.29082944403210434e-3,
        3.77235659855679473e-2,
        1.16196763550017512e-1,
        3.77235659855679473e-2,
        1.29082944403210434e-3,
    ],
    [
        3.97603460258718223e-3,
        1.16196763550017512e-1,
        3.57911228876508503e-1,
        1.16196763550017512e-1,
        3.97603460258718223e-3,
    ],
    [
        1.29082944403210434e-3,
        3.77235659855679473e-2,
        1.16196763550017512e-1,
        3.77235659855679473e-2,
        1.29082944403210434e-3,
    ],
    [
        4.41697546360726284e-5,
        1.29082944403210434e-3,
        3.97603460258718223e-3,
        1.29082944403210434e-3,
        4.41697546360726284e-5,
    ],
];

const GAUSS7: [[f64; 7]; 7] = [
    [
        1.96519161240319030e-5,
        2.39409349497269908e-4,
        1.07295826497866027e-3,
        1.76900911404382168e-3,
        1.07295826497866027e-3,
        2.39409349497269908e-4,
        1.96519161240319030e-5,
    ],
    [
        2.39409349497269908e-4,
        2.91660295438643784e-3,
        1.30713075831894072e-2,
        2.15509428482682612e-2,
        1.30713075831894072e-2,
        2.91660295438643784e-3,
        2.39409349497269908e-4,
    ],
    [
        1.07295826497866027e-3,
        1.30713075831894072e-2,
        5.85815363306070314e-2,
        9.65846250185641436e-2,
        5.85815363306070314e-2,
        1.30713075831894072e-2,
        1.07295826497866027e-3,
    ],
    [
        1.76900911404382168e-3,
        2.15509428482682612e-2,
        9.65846250185641436e-2,
        1.59241125690702479e-1,
        9.65846250185641436e-2,
        2.15509428482682612e-2,
        1.76900911404382168e-3,
    ],
    [
        1.07295826497866027e-3,
        1.30713075831894072e-2,
        5.85815363306070314e-2,
        9.65846250185641436e-2,
        5.85815363306070314e-2,
        1.30713075831894072e-2,
        1.07295826497866027e-3,
    ],
    [
        2.39409349497269908e-4,
        2.91660295438643784e-3,
        1.30713075831894072e-2,
        2.15509428482682612e-2,
        1.30713075831894072e-2,
        2.91660295438643784e-3,
        2.39409349497269908e-4,
    ],
    [
        1.96519161240319030e-5,
        2.39409349497269908e-4,
        1.07295826497866027e-3,
        1.76900911404382168e-3,
        1.07295826497866027e-3,
        2.39409349497269908e-4,
        1.96519161240319030e-5,
    ],
];

/// Gradient along x; outer index is x, matching the grid layout.
const SOBEL_X: [[f64; 3]; 3] = [
    [1.0, 2.0, 1.0],
    [0.0, 0.0, 0.0],
    [-1.0, -2.0, -1.0],
];

/// Transpose of [`SOBEL_X`] with flipped sign.
const SOBEL_Y: [[f64; 3]; 3] = [
    [-1.0, 0.0, 1.0],
    [-2.0, 0.0, 2.0],
    [-1.0, 0.0, 1.0],
];

/// Identifier of a catalog filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GridFilter {
    /// Pass the grid through unchanged
    #[default]
    Identity,
    /// 3x3 Gaussian smoothing
    Gauss3,
    /// 5x5 Gaussian smoothing
    Gauss5,
    /// 7x7 Gaussian smoothing
    Gauss7,
    /// 3x3 median (order-statistic, not a convolution)
    Median3,
    /// Sobel gradient along x
    SobelX,
    /// Sobel gradient along y
    SobelY,
}

impl GridFilter {
    /// Every catalog entry, in display order.
    pub const ALL: [GridFilter; 7] = [
        GridFilter::Identity,
        GridFilter::Gauss3,
        GridFilter::Gauss5,
        GridFilter::Gauss7,
        GridFilter::Median3,
        GridFilter::SobelX,
        GridFilter::SobelY,
    ];

    /// Display name of the filter.
    pub fn name(&self) -> &'static str {
        match self {
            GridFilter::Identity => "identity",
            GridFilter::Gauss3 => "gauss3",
            GridFilter::Gauss5 => "gauss5",
            GridFilter::Gauss7 => "gauss7",
            GridFilter::Median3 => "median3",
            GridFilter::SobelX => "sobel-x",
            GridFilter::SobelY => "sobel-y",
        }
    }

    /// The filter's weight matrix, if it is a convolution.
    ///
    /// `Identity` and `Median3` have no kernel: the former is a no-op,
    /// the latter an order-statistic filter.
    pub fn kernel(&self) -> Option<Kernel> {
        let kernel = match self {
            GridFilter::Identity | GridFilter::Median3 => return None,
            GridFilter::Gauss3 => Kernel::from_rows(&GAUSS3),
            GridFilter::Gauss5 => Kernel::from_rows(&GAUSS5),
            GridFilter::Gauss7 => Kernel::from_rows(&GAUSS7),
            GridFilter::SobelX => Kernel::from_rows(&SOBEL_X),
            GridFilter::SobelY => Kernel::from_rows(&SOBEL_Y),
        };
        Some(kernel.expect("catalog tables are odd-dimensioned"))
    }

    /// Apply the filter to a grid, producing a grid of the same shape.
    pub fn apply(&self, grid: &ScalarGrid) -> ScalarGrid {
        match self {
            GridFilter::Identity => grid.clone(),
            GridFilter::Median3 => median3(grid),
            _ => convolve(grid, &self.kernel().expect("convolution filter")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridalign_core::Axis;

    fn constant_grid(w: usize, h: usize, v: f64) -> ScalarGrid {
        let xs = Axis::new((0..w).map(|i| i as f64).collect()).unwrap();
        let ys = Axis::new((0..h).map(|i| i as f64).collect()).unwrap();
        ScalarGrid::filled(xs, ys, v)
    }

    #[test]
    fn test_gaussians_have_unit_sum() {
        for filter in [GridFilter::Gauss3, GridFilter::Gauss5, GridFilter::Gauss7] {
            let sum = filter.kernel().unwrap().sum();
            assert!((sum - 1.0).abs() < 1e-12, "{}: {}", filter.name(), sum);
        }
    }

    #[test]
    fn test_sobel_on_constant_grid_is_zero() {
        let g = constant_grid(6, 5, 7.25);
        for filter in [GridFilter::SobelX, GridFilter::SobelY] {
            let out = filter.apply(&g);
            for &v in out.values() {
                assert!(v.abs() < 1e-12, "{}: {}", filter.name(), v);
            }
        }
    }

    #[test]
    fn test_identity_returns_input() {
        let g = constant_grid(3, 3, 1.0);
        assert_eq!(GridFilter::Identity.apply(&g), g);
    }

    #[test]
    fn test_sobel_x_measures_x_gradient() {
        // f(x, y) = x: the centered difference doubled by the (1,2,1)
        // smoothing column sums to 8 in the interior.
        let xs = Axis::new((0..6).map(|i| i as f64).collect()).unwrap();
        let ys = Axis::new((0..5).map(|i| i as f64).collect()).unwrap();
        let mut data = Vec::new();
        for ix in 0..6 {
            for _ in 0..5 {
                data.push(ix as f64);
            }
        }
        let g = ScalarGrid::from_values(xs, ys, data).unwrap();
        let gx = GridFilter::SobelX.apply(&g);
        assert!((gx.value(2, 2) - 8.0).abs() < 1e-12);
        let gy = GridFilter::SobelY.apply(&g);
        assert!(gy.value(2, 2).abs() < 1e-12);
    }
}
