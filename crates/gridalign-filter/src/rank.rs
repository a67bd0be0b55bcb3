//! Order-statistic filtering
//!
//! The 3x3 median used for impulse-noise cleanup. Unlike the
//! convolution filters this is rank-based: the nine neighborhood
//! samples are fully sorted and the middle element taken.

use gridalign_core::ScalarGrid;

use crate::convolve::sample_replicated;

/// Replace each sample with the median of its 3x3 neighborhood.
///
/// The neighborhood is edge-extrapolated like the convolution source,
/// so border pixels see replicated border samples.
pub fn median3(grid: &ScalarGrid) -> ScalarGrid {
    let w = grid.width();
    let h = grid.height();

    let mut data = Vec::with_capacity(w * h);
    let mut window = [0.0f64; 9];
    for x in 0..w as i64 {
        for y in 0..h as i64 {
            let mut k = 0;
            for dx in -1..=1 {
                for dy in -1..=1 {
                    window[k] = sample_replicated(grid, x + dx, y + dy);
                    k += 1;
                }
            }
            window.sort_by(|a, b| a.total_cmp(b));
            data.push(window[4]);
        }
    }

    grid.with_values(data).expect("output shape matches source")
}
