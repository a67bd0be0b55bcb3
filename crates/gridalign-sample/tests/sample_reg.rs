//! Grid sampling regression test
//!
//! Checks the bracketing search, stored-coordinate identities for the
//! cheap interpolation modes, and cubic-polynomial reproduction for
//! the bicubic mode.
//!
//! Run with:
//! ```
//! cargo test -p gridalign-sample --test sample_reg
//! ```

use gridalign_core::{Axis, NormalizedGrid, ScalarGrid};
use gridalign_sample::{SampleError, SampleMode, sample, sample_or_nan, sample_physical};
use gridalign_test::RegParams;

fn build_grid(xs: &[f64], ys: &[f64], f: impl Fn(f64, f64) -> f64) -> ScalarGrid {
    let xs = Axis::new(xs.to_vec()).unwrap();
    let ys = Axis::new(ys.to_vec()).unwrap();
    let mut data = Vec::with_capacity(xs.len() * ys.len());
    for &x in xs.as_slice() {
        for &y in ys.as_slice() {
            data.push(f(x, y));
        }
    }
    ScalarGrid::from_values(xs, ys, data).unwrap()
}

#[test]
fn sample_reg() {
    let mut rp = RegParams::new("sample");

    // --- Bracketing search on [1, 3, 5, 7] ---
    let axis = Axis::new(vec![1.0, 3.0, 5.0, 7.0]).unwrap();
    rp.compare_bool("lower_index(4) == 1", axis.lower_index(4.0) == Some(1));
    rp.compare_bool("lower_index(0) == None", axis.lower_index(0.0).is_none());
    rp.compare_bool("lower_index(9) == 3", axis.lower_index(9.0) == Some(3));

    // --- Stored-coordinate identity for nearest and bilinear ---
    let f = |x: f64, y: f64| 0.3 * x * x - 1.7 * y + x * y;
    let grid = build_grid(&[0.0, 0.4, 1.1, 2.0, 3.3], &[-1.0, 0.0, 0.5, 2.0, 2.5], f);
    eprintln!("  Testing stored-coordinate identities");
    for &x in grid.xs().as_slice() {
        for &y in grid.ys().as_slice() {
            let expect = f(x, y);
            let nn = sample(&grid, x, y, SampleMode::Nearest).unwrap();
            let bl = sample(&grid, x, y, SampleMode::Bilinear).unwrap();
            rp.compare_values(expect, nn, 0.0);
            rp.compare_values(expect, bl, 1e-12);
        }
    }

    // --- Bicubic reproduces a true cubic polynomial ---
    eprintln!("  Testing bicubic polynomial reproduction");
    let cubic = |x: f64, y: f64| x * x * x - 0.5 * x * x + 2.0 * y * y * y + y - 4.0 + x * y;
    let grid = build_grid(
        &[0.0, 0.6, 1.3, 2.0, 2.9, 4.0],
        &[0.0, 0.5, 1.2, 2.2, 3.0, 3.8],
        cubic,
    );
    // Interior windows only: four stored samples on each side of the
    // query on both axes.
    for (x, y) in [(0.9, 0.9), (1.5, 1.6), (2.3, 2.4), (1.31, 2.21)] {
        let got = sample(&grid, x, y, SampleMode::Bicubic).unwrap();
        rp.compare_values(cubic(x, y), got, 1e-9);
    }

    // --- Short axes fail, and the render path degrades to NaN ---
    eprintln!("  Testing bicubic failure handling");
    let short = build_grid(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 2.0, 3.0, 4.0], f);
    let err = sample(&short, 1.5, 1.5, SampleMode::Bicubic);
    rp.compare_bool(
        "short axis reports BadDomainSize",
        matches!(err, Err(SampleError::BadDomainSize { len: 4, min: 5 })),
    );
    rp.compare_bool(
        "render path degrades to NaN",
        sample_or_nan(&short, 1.5, 1.5, SampleMode::Bicubic).is_nan(),
    );

    // --- Normalized round trip in physical units ---
    eprintln!("  Testing normalized sampling");
    let norm = NormalizedGrid::from_physical(&grid);
    for (x, y) in [(0.9, 0.9), (2.3, 2.4)] {
        let phys = sample_physical(&norm, x, y, SampleMode::Bicubic).unwrap();
        rp.compare_values(cubic(x, y), phys, 1e-8);
    }

    assert!(rp.cleanup());
}
