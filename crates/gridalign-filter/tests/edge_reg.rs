//! Edge extraction regression test
//!
//! Runs the full pipeline on a synthetic step image: Sobel responds on
//! the two columns adjacent to the step, suppression keeps exactly one
//! of them, and the histogram spans the rounded-up maximum.
//!
//! Run with:
//! ```
//! cargo test -p gridalign-filter --test edge_reg
//! ```

use gridalign_core::{Axis, ScalarGrid};
use gridalign_filter::{GridFilter, extract_edges, rounded_max, threshold};
use gridalign_test::RegParams;

/// Left half 0, right half 1; the first high column is `step`.
fn step_grid(w: usize, h: usize, step: usize) -> ScalarGrid {
    let xs = Axis::new((0..w).map(|i| i as f64).collect()).unwrap();
    let ys = Axis::new((0..h).map(|i| i as f64).collect()).unwrap();
    let mut data = Vec::with_capacity(w * h);
    for ix in 0..w {
        for _ in 0..h {
            data.push(if ix >= step { 1.0 } else { 0.0 });
        }
    }
    ScalarGrid::from_values(xs, ys, data).unwrap()
}

#[test]
fn edge_reg() {
    let mut rp = RegParams::new("edge");

    let grid = step_grid(7, 5, 3);
    let field = extract_edges(&grid, GridFilter::Identity);
    let mag = &field.magnitude;

    // --- Exactly one non-zero column, at the step, with the Sobel
    //     response of 4 ---
    eprintln!("  Testing step response");
    let mut nonzero_cols = Vec::new();
    for ix in 0..mag.width() {
        if (0..mag.height()).any(|iy| mag.value(ix, iy) != 0.0) {
            nonzero_cols.push(ix);
        }
    }
    rp.compare_values(1.0, nonzero_cols.len() as f64, 0.0);
    rp.compare_values(3.0, nonzero_cols[0] as f64, 0.0);
    for iy in 0..mag.height() {
        rp.compare_values(4.0, mag.value(3, iy), 1e-12);
    }

    // --- Histogram: span [0, 4], step magnitudes in the last bin ---
    eprintln!("  Testing histogram");
    let hist = &field.histogram;
    rp.compare_values(20.0, hist.counts().len() as f64, 0.0);
    rp.compare_values(0.2, hist.bin_width(), 1e-12);
    rp.compare_values(4.0, hist.max(), 1e-12);
    rp.compare_values(0.0, hist.min(), 0.0);
    rp.compare_values(5.0, hist.counts()[19] as f64, 0.0);
    rp.compare_values(30.0, hist.counts()[0] as f64, 0.0);

    // --- Thresholding the magnitude grid ---
    eprintln!("  Testing threshold");
    let mask = threshold(mag, 1.0, 10.0);
    rp.compare_values(5.0, mask.count_ones() as f64, 0.0);
    rp.compare_bool("mask marks the step column", mask.get(3, 2) == Some(1));

    // --- Smoothed run still produces a bounded, well-formed result ---
    eprintln!("  Testing smoothed pipeline");
    let smoothed_field = extract_edges(&grid, GridFilter::Gauss3);
    let smoothed_max = smoothed_field.histogram.max();
    rp.compare_bool("smoothing keeps a response", smoothed_max > 0.0);
    rp.compare_bool(
        "histogram span dominates the maximum",
        rounded_max(smoothed_max) >= smoothed_max,
    );

    // --- rounded_max: >= input, two significant figures, multiple
    //     of 5 in the second digit ---
    eprintln!("  Testing rounded_max");
    for raw in [0.0123, 0.37, 1.0, 2.04, 4.0, 4.1, 17.3, 99.0, 1234.5] {
        let r = rounded_max(raw);
        rp.compare_bool("rounded_max dominates", r >= raw);
        let exp = r.log10().floor() as i32;
        let leading = r / 10f64.powi(exp - 1);
        let snapped = (leading / 5.0).round() * 5.0;
        rp.compare_values(snapped, leading, 1e-6);
    }

    // --- An all-flat field survives with a degenerate histogram ---
    let flat = step_grid(7, 5, 7);
    let flat_field = extract_edges(&flat, GridFilter::Identity);
    rp.compare_values(0.0, flat_field.histogram.max(), 0.0);
    rp.compare_values(35.0, flat_field.histogram.counts()[0] as f64, 0.0);

    assert!(rp.cleanup());
}
