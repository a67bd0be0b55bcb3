//! Generic 2-D convolution with boundary extrapolation
//!
//! The boundary policy is asymmetric and load-bearing: source reads
//! outside the grid replicate the nearest border sample (preserving
//! signal energy near edges), while kernel reads outside the kernel's
//! extent are zero (kernels have finite support). Changing either side
//! changes every edge pixel.

use gridalign_core::ScalarGrid;

use crate::kernel::Kernel;

/// Convolve a grid with a centered kernel.
///
/// The output has the source's exact shape and axes. The accumulation
/// is the true convolution form
/// `out[x][y] = Σ_{u,v} src(x-u, y-v) · k(cx+u, cy+v)`,
/// so an asymmetric kernel's orientation matters (the Sobel pair
/// relies on it).
pub fn convolve(grid: &ScalarGrid, kernel: &Kernel) -> ScalarGrid {
    let w = grid.width();
    let h = grid.height();
    let cx = kernel.center_x() as i64;
    let cy = kernel.center_y() as i64;

    let mut data = Vec::with_capacity(w * h);
    for x in 0..w as i64 {
        for y in 0..h as i64 {
            let mut sum = 0.0;
            for kx in 0..kernel.width() as i64 {
                for ky in 0..kernel.height() as i64 {
                    let weight = kernel.get(kx, ky);
                    if weight == 0.0 {
                        continue;
                    }
                    let sx = x - (kx - cx);
                    let sy = y - (ky - cy);
                    sum += sample_replicated(grid, sx, sy) * weight;
                }
            }
            data.push(sum);
        }
    }

    grid.with_values(data).expect("output shape matches source")
}

/// Source sample with replicate (clamp) boundary handling: reads
/// outside the grid return the nearest border value.
#[inline]
pub(crate) fn sample_replicated(grid: &ScalarGrid, x: i64, y: i64) -> f64 {
    let x = x.clamp(0, grid.width() as i64 - 1) as usize;
    let y = y.clamp(0, grid.height() as i64 - 1) as usize;
    grid.value(x, y)
}
