//! Gradient-based edge extraction
//!
//! Pipeline: smooth with a caller-selected catalog filter, take Sobel
//! gradients, suppress non-maxima along the quantized gradient
//! direction, then report the surviving magnitudes together with a
//! 20-bin histogram whose span is the rounded-up maximum.
//!
//! Suppression is bounds-safe: a pixel at the grid boundary has no
//! neighbor on that side and automatically survives the missing
//! comparison. Ties across a plateau of equal responses break toward
//! the positive direction (strict comparison forward, inclusive
//! backward), so a two-pixel plateau yields a single response.

use std::f64::consts::PI;

use gridalign_core::{Histogram, LabelGrid, ScalarGrid};

use crate::bank::GridFilter;
use crate::convolve::convolve;

/// Number of histogram bins reported per extraction.
pub const HISTOGRAM_BINS: usize = 20;

/// Result of an edge extraction pass.
#[derive(Debug, Clone)]
pub struct EdgeField {
    /// Suppressed gradient magnitude (>= 0, same shape as the input)
    pub magnitude: ScalarGrid,
    /// Magnitude histogram over `[0, rounded_max(raw_max)]`
    pub histogram: Histogram,
}

/// One of the four undirected gradient orientations.
///
/// Buckets are centered on multiples of 45° and cover ±22.5° each,
/// merged with their 180°-rotated mirror. The associated offset is the
/// along-gradient (perpendicular-to-edge) step used for suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Deg0,
    Deg45,
    Deg90,
    Deg135,
}

impl Orientation {
    /// Quantize an angle in `(-π, π]` using breakpoints at multiples
    /// of π/8.
    fn from_angle(angle: f64) -> Self {
        // Fold opposite directions together: the buckets are
        // undirected.
        let mut a = angle;
        if a < 0.0 {
            a += PI;
        }
        if a < PI / 8.0 {
            Orientation::Deg0
        } else if a < 3.0 * PI / 8.0 {
            Orientation::Deg45
        } else if a < 5.0 * PI / 8.0 {
            Orientation::Deg90
        } else if a < 7.0 * PI / 8.0 {
            Orientation::Deg135
        } else {
            Orientation::Deg0
        }
    }

    /// Along-gradient step for this orientation.
    fn step(&self) -> (i64, i64) {
        match self {
            Orientation::Deg0 => (1, 0),
            Orientation::Deg45 => (1, 1),
            Orientation::Deg90 => (0, 1),
            Orientation::Deg135 => (-1, 1),
        }
    }
}

/// Extract edges from a grid.
///
/// `filter` selects the smoothing step ([`GridFilter::Identity`] to
/// skip it). Returns the suppressed magnitude field and its histogram.
pub fn extract_edges(grid: &ScalarGrid, filter: GridFilter) -> EdgeField {
    let smoothed = filter.apply(grid);
    let gx = convolve(
        &smoothed,
        &GridFilter::SobelX.kernel().expect("sobel kernel"),
    );
    let gy = convolve(
        &smoothed,
        &GridFilter::SobelY.kernel().expect("sobel kernel"),
    );

    let w = grid.width();
    let h = grid.height();

    // Squared magnitude and gradient angle, kept only through the
    // suppression pass.
    let mut sq = vec![0.0f64; w * h];
    let mut angle = vec![0.0f64; w * h];
    for ix in 0..w {
        for iy in 0..h {
            let (dx, dy) = (gx.value(ix, iy), gy.value(ix, iy));
            sq[ix * h + iy] = dx * dx + dy * dy;
            angle[ix * h + iy] = dy.atan2(dx);
        }
    }

    let at = |x: i64, y: i64| -> Option<f64> {
        if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
            None
        } else {
            Some(sq[x as usize * h + y as usize])
        }
    };

    let mut magnitude = vec![0.0f64; w * h];
    for ix in 0..w as i64 {
        for iy in 0..h as i64 {
            let idx = ix as usize * h + iy as usize;
            let value = sq[idx];
            let (dx, dy) = Orientation::from_angle(angle[idx]).step();

            // A missing neighbor passes its comparison automatically.
            let forward_ok = match at(ix + dx, iy + dy) {
                Some(other) => value > other,
                None => true,
            };
            let backward_ok = match at(ix - dx, iy - dy) {
                Some(other) => value >= other,
                None => true,
            };

            if forward_ok && backward_ok {
                magnitude[idx] = value.sqrt();
            }
        }
    }

    let raw_max = magnitude.iter().copied().fold(0.0f64, f64::max);
    let histogram = Histogram::collect(&magnitude, HISTOGRAM_BINS, rounded_max(raw_max));
    let magnitude = grid
        .with_values(magnitude)
        .expect("output shape matches source");

    EdgeField {
        magnitude,
        histogram,
    }
}

/// Smallest value `>= raw` whose two leading decimal digits form a
/// multiple of 5.
///
/// Display-oriented rounding for the histogram span: the result has at
/// most two significant figures. A non-positive or non-finite input
/// (an all-suppressed field) falls back to 1 so the bins stay
/// well-formed.
pub fn rounded_max(raw: f64) -> f64 {
    if !(raw > 0.0) || !raw.is_finite() {
        return 1.0;
    }
    let exp = raw.log10().floor() as i32;
    let scale = 10f64.powi(exp - 1);
    let mut leading = (raw / scale / 5.0).ceil() * 5.0;
    // Rounding error in the division can inflate the ceiling by one
    // step; take it back when the smaller bound still dominates.
    if leading > 5.0 && (leading - 5.0) * scale >= raw {
        leading -= 5.0;
    }
    let rounded = leading * scale;
    if rounded < raw {
        (leading + 5.0) * scale
    } else {
        rounded
    }
}

/// Binary edge mask: 1 where `lower <= magnitude <= upper`.
pub fn threshold(magnitude: &ScalarGrid, lower: f64, upper: f64) -> LabelGrid {
    let mut mask = LabelGrid::new(magnitude.width(), magnitude.height())
        .expect("magnitude grid has nonzero extents");
    for x in 0..magnitude.width() {
        for y in 0..magnitude.height() {
            let m = magnitude.value(x, y);
            if m >= lower && m <= upper {
                mask.set(x, y, 1).expect("in bounds");
            }
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridalign_core::Axis;

    #[test]
    fn test_orientation_buckets() {
        assert_eq!(Orientation::from_angle(0.0), Orientation::Deg0);
        assert_eq!(Orientation::from_angle(PI), Orientation::Deg0);
        assert_eq!(Orientation::from_angle(PI / 4.0), Orientation::Deg45);
        assert_eq!(
            Orientation::from_angle(-3.0 * PI / 4.0),
            Orientation::Deg45
        );
        assert_eq!(Orientation::from_angle(PI / 2.0), Orientation::Deg90);
        assert_eq!(Orientation::from_angle(-PI / 2.0), Orientation::Deg90);
        assert_eq!(
            Orientation::from_angle(3.0 * PI / 4.0),
            Orientation::Deg135
        );
        assert_eq!(Orientation::from_angle(-PI / 4.0), Orientation::Deg135);
        // Breakpoints at odd multiples of π/8 belong to the next bucket
        assert_eq!(Orientation::from_angle(PI / 8.0), Orientation::Deg45);
    }

    #[test]
    fn test_rounded_max_examples() {
        assert!((rounded_max(1.0) - 1.0).abs() < 1e-12);
        assert!((rounded_max(2.04) - 2.5).abs() < 1e-12);
        assert!((rounded_max(4.0) - 4.0).abs() < 1e-12);
        assert!((rounded_max(4.1) - 4.5).abs() < 1e-12);
        assert!((rounded_max(0.037) - 0.04).abs() < 1e-12);
        assert!((rounded_max(100.0) - 100.0).abs() < 1e-9);
        assert_eq!(rounded_max(0.0), 1.0);
        assert_eq!(rounded_max(-3.0), 1.0);
    }

    #[test]
    fn test_rounded_max_dominates_input() {
        let mut v = 1.3e-3;
        while v < 1.0e3 {
            assert!(rounded_max(v) >= v, "rounded_max({v}) < {v}");
            v *= 1.618;
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let xs = Axis::new(vec![0.0, 1.0, 2.0]).unwrap();
        let ys = Axis::new(vec![0.0]).unwrap();
        let mag = ScalarGrid::from_values(xs, ys, vec![0.5, 1.0, 2.0]).unwrap();
        let mask = threshold(&mag, 1.0, 2.0);
        assert_eq!(mask.get(0, 0), Some(0));
        assert_eq!(mask.get(1, 0), Some(1));
        assert_eq!(mask.get(2, 0), Some(1));
    }
}
