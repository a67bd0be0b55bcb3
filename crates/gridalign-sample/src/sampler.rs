//! Resampling of non-uniform scalar grids at arbitrary coordinates
//!
//! Three interpolation modes over a [`ScalarGrid`]: nearest-neighbor,
//! bilinear, and bicubic. Queries anywhere outside the stored axes
//! extrapolate flatly (nearest/bilinear) or continue the edge cubic
//! (bicubic, with mirrored virtual abscissas).
//!
//! Bicubic failures are recoverable: [`sample_or_nan`] is the
//! render-path entry point that degrades them to NaN instead of
//! aborting a whole pass.

use gridalign_core::{Axis, NormalizedGrid, ScalarGrid};

use crate::cubic::Cubic;
use crate::error::{SampleError, SampleResult};

/// Interpolation mode for [`sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMode {
    /// Value of the stored sample closest to the query
    Nearest,
    /// Bilinear interpolation between the four bracketing samples
    #[default]
    Bilinear,
    /// Bicubic interpolation over a 4x4 window; needs >= 5 samples
    /// per axis
    Bicubic,
}

/// Sample a grid at physical coordinates `(x, y)`.
///
/// # Errors
///
/// Bicubic mode fails with `BadDomainSize` on an axis shorter than 5
/// samples and `SingularMatrix` on degenerate abscissa spacing. The
/// other modes cannot fail.
pub fn sample(grid: &ScalarGrid, x: f64, y: f64, mode: SampleMode) -> SampleResult<f64> {
    match mode {
        SampleMode::Nearest => Ok(sample_nearest(grid, x, y)),
        SampleMode::Bilinear => Ok(sample_bilinear(grid, x, y)),
        SampleMode::Bicubic => sample_bicubic(grid, x, y),
    }
}

/// Sample a grid, degrading interpolation failures to NaN.
///
/// The render paths treat both bicubic failure kinds as
/// "interpolation unavailable" for that query rather than a fatal
/// condition.
pub fn sample_or_nan(grid: &ScalarGrid, x: f64, y: f64, mode: SampleMode) -> f64 {
    sample(grid, x, y, mode).unwrap_or(f64::NAN)
}

/// Sample a normalized grid, staying in the `[0, 1]` scale.
///
/// The bicubic result is clamped to `[0, 1]`: the cubic may overshoot
/// near sharp transitions and the unit scale is authoritative for
/// normalized data.
pub fn sample_scaled(
    norm: &NormalizedGrid,
    x: f64,
    y: f64,
    mode: SampleMode,
) -> SampleResult<f64> {
    let v = sample(norm.grid(), x, y, mode)?;
    Ok(match mode {
        SampleMode::Bicubic => v.clamp(0.0, 1.0),
        _ => v,
    })
}

/// Sample a normalized grid in physical units:
/// `scaled * amplitude + minimum`.
pub fn sample_physical(
    norm: &NormalizedGrid,
    x: f64,
    y: f64,
    mode: SampleMode,
) -> SampleResult<f64> {
    Ok(norm.to_physical(sample_scaled(norm, x, y, mode)?))
}

fn sample_nearest(grid: &ScalarGrid, x: f64, y: f64) -> f64 {
    let ix = nearest_index(grid.xs(), x);
    let iy = nearest_index(grid.ys(), y);
    grid.value(ix, iy)
}

/// Index of the stored coordinate closest to `key`, out-of-range
/// brackets clamped to the nearest endpoint; ties favor the upper
/// index.
fn nearest_index(axis: &Axis, key: f64) -> usize {
    let last = axis.len() - 1;
    match axis.lower_index(key) {
        None => 0,
        Some(lower) if lower == last => last,
        Some(lower) => {
            let upper = lower + 1;
            let dl = key - axis.at(lower);
            let du = axis.at(upper) - key;
            if du <= dl { upper } else { lower }
        }
    }
}

/// Bracketing indices for `key`, clamped independently to the axis.
fn bracket(axis: &Axis, key: f64) -> (usize, usize) {
    let last = axis.len() - 1;
    match axis.lower_index(key) {
        None => (0, 0),
        Some(lower) if lower == last => (last, last),
        Some(lower) => (lower, lower + 1),
    }
}

/// Linear interpolant with flat extrapolation on a collapsed bracket:
/// when the two abscissas coincide the slope is defined as 0.
fn lerp(x0: f64, x1: f64, f0: f64, f1: f64, x: f64) -> f64 {
    if x1 == x0 {
        f0
    } else {
        f0 + (x - x0) * (f1 - f0) / (x1 - x0)
    }
}

fn sample_bilinear(grid: &ScalarGrid, x: f64, y: f64) -> f64 {
    let (xl, xu) = bracket(grid.xs(), x);
    let (yl, yu) = bracket(grid.ys(), y);
    let (x0, x1) = (grid.xs().at(xl), grid.xs().at(xu));

    let v_low = lerp(x0, x1, grid.value(xl, yl), grid.value(xu, yl), x);
    let v_high = if yu != yl {
        lerp(x0, x1, grid.value(xl, yu), grid.value(xu, yu), x)
    } else {
        v_low
    };
    lerp(grid.ys().at(yl), grid.ys().at(yu), v_low, v_high, y)
}

/// Four-sample interpolation window on one axis: abscissas for the
/// cubic fit plus the clamped data indices they read from.
struct CubicWindow {
    ts: [f64; 4],
    idx: [usize; 4],
}

/// Build the centered window `[lower-1, lower, lower+1, lower+2]`.
///
/// Slots that fall off the axis get a virtual abscissa mirroring the
/// end spacing outward; their data index clamps to the array bounds,
/// so the fit degenerates to a flat continuation rather than reading
/// out of bounds.
fn cubic_window(axis: &Axis, key: f64) -> CubicWindow {
    let n = axis.len() as i64;
    let lower = match axis.lower_index(key) {
        None => -1i64,
        Some(i) => i as i64,
    };

    let mut ts = [0.0; 4];
    let mut idx = [0usize; 4];
    let first_gap = axis.at(1) - axis.at(0);
    let last_gap = axis.at(axis.len() - 1) - axis.at(axis.len() - 2);

    for (slot, i) in (lower - 1..=lower + 2).enumerate() {
        ts[slot] = if i < 0 {
            axis.first() + i as f64 * first_gap
        } else if i >= n {
            axis.last() + (i - (n - 1)) as f64 * last_gap
        } else {
            axis.at(i as usize)
        };
        idx[slot] = i.clamp(0, n - 1) as usize;
    }

    CubicWindow { ts, idx }
}

fn sample_bicubic(grid: &ScalarGrid, x: f64, y: f64) -> SampleResult<f64> {
    for axis in [grid.xs(), grid.ys()] {
        if axis.len() < 5 {
            return Err(SampleError::BadDomainSize {
                len: axis.len(),
                min: 5,
            });
        }
    }

    let wx = cubic_window(grid.xs(), x);
    let wy = cubic_window(grid.ys(), y);

    // Cubic along x at each of the four y-rows, then a cubic along y
    // through the four row values.
    let mut row_values = [0.0; 4];
    for (row, &iy) in wy.idx.iter().enumerate() {
        let ys = wx.idx.map(|ix| grid.value(ix, iy));
        row_values[row] = Cubic::fit(wx.ts, ys)?.eval(x);
    }
    Ok(Cubic::fit(wy.ts, row_values)?.eval(y))
}
