//! Text-record grid ingestion
//!
//! Reads `x,y,value` records, one per line, into a [`ScalarGrid`].
//! Lines beginning with `#` are comments; blank lines are skipped.
//! Coordinates are deduplicated under a relative-difference cutoff
//! before being sorted into the two axes, and the record count must
//! equal the product of the axis extents.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use gridalign_core::{Axis, ScalarGrid};

use crate::error::{IoError, IoResult};

/// Relative-difference cutoff for coordinate deduplication; absolute
/// when the reference value is exactly 0.
pub const COORD_CUTOFF: f64 = 1e-4;

/// True when `candidate` is the same coordinate as `reference` under
/// the deduplication cutoff.
fn same_coord(candidate: f64, reference: f64) -> bool {
    if reference == 0.0 {
        candidate.abs() <= COORD_CUTOFF
    } else {
        ((candidate - reference) / reference).abs() <= COORD_CUTOFF
    }
}

/// Index of `key` in the deduplicated coordinate list, if present.
fn find_coord(coords: &[f64], key: f64) -> Option<usize> {
    coords.iter().position(|&c| same_coord(key, c))
}

/// Read a grid from `x,y,value` text records.
///
/// # Errors
///
/// - `IoError::BadRecord` for a non-comment line that does not parse
///   as three comma-separated numbers
/// - `IoError::ImproperFormatting` when the number of data rows does
///   not equal `|xs| * |ys|`
/// - `IoError::Io` for underlying read failures
pub fn read_grid<R: BufRead>(reader: R) -> IoResult<ScalarGrid> {
    let mut records: Vec<(f64, f64, f64)> = Vec::new();
    let mut xs: Vec<f64> = Vec::new();
    let mut ys: Vec<f64> = Vec::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split(',');
        let record = (|| {
            let x = fields.next()?.trim().parse::<f64>().ok()?;
            let y = fields.next()?.trim().parse::<f64>().ok()?;
            let v = fields.next()?.trim().parse::<f64>().ok()?;
            if fields.next().is_some() {
                return None;
            }
            Some((x, y, v))
        })();
        let (x, y, v) = record.ok_or_else(|| IoError::BadRecord {
            line: line_no + 1,
            text: trimmed.to_string(),
        })?;

        if find_coord(&xs, x).is_none() {
            xs.push(x);
        }
        if find_coord(&ys, y).is_none() {
            ys.push(y);
        }
        records.push((x, y, v));
    }

    let expected = xs.len() * ys.len();
    if records.len() != expected {
        return Err(IoError::ImproperFormatting {
            expected,
            found: records.len(),
        });
    }

    xs.sort_by(|a, b| a.total_cmp(b));
    ys.sort_by(|a, b| a.total_cmp(b));

    let height = ys.len();
    let mut data = vec![f64::NAN; xs.len() * height];
    for (x, y, v) in records {
        let ix = find_coord(&xs, x).expect("x coordinate was deduplicated");
        let iy = find_coord(&ys, y).expect("y coordinate was deduplicated");
        data[ix * height + iy] = v;
    }

    let xs = Axis::new(xs)?;
    let ys = Axis::new(ys)?;
    Ok(ScalarGrid::from_values(xs, ys, data)?)
}

/// Read a grid from a file of `x,y,value` records.
pub fn read_grid_file<P: AsRef<Path>>(path: P) -> IoResult<ScalarGrid> {
    read_grid(BufReader::new(File::open(path)?))
}
