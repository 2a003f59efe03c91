// ============================================================
// File: ingest.rs
// Project: parcelindex
// Date: Oct 18, 2026
//
// Description:
//   Reads the flat parcel data file and turns each line into a
//   validated `Parcel`. This is the only way records reach the
//   index at startup; the index is rebuilt from the file every run.
//
// Format:
//   One parcel per line, comma separated:
//
//     <country>, <weight>, <value>
//
//   Whitespace around fields is ignored and blank lines are skipped.
//
// Validation:
//   1) Country must be non-empty.
//   2) Weight must be a finite number in 100..=50000.
//   3) Value must be a finite number in 10..=2000.
//   Lines failing any check are logged and skipped, never inserted.
// ============================================================
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::RangeInclusive;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{IngestError, ParseError};
use crate::{Parcel, ParcelIndex};

/// Data file read when none is given on the command line.
pub const DEFAULT_DATA_FILE: &str = "couriers.txt";

/// Accepted parcel weights, inclusive.
pub const WEIGHT_RANGE: RangeInclusive<f64> = 100.0..=50_000.0;

/// Accepted parcel values, inclusive.
pub const VALUE_RANGE: RangeInclusive<f64> = 10.0..=2_000.0;


/// Outcome of feeding a batch of lines into the index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}


/// Read every line of the data file, keeping file positions.
///
/// # Arguments
///
/// * `path` - Data file to read.
///
/// # Returns
///
/// One entry per line in file order. A line that is not valid UTF-8 is
/// kept as `None` so later line numbers still match the file. Any other
/// read failure (including `path` being a directory) stops the read
/// and is returned as [`IngestError::Io`].
pub fn read_lines(path: &Path) -> Result<Vec<Option<String>>, IngestError> {
    let io_error = |source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    };

    let data_file = File::open(path).map_err(io_error)?;
    let buf_reader = BufReader::new(data_file);
    let mut lines = Vec::new();

    for raw in buf_reader.split(b'\n') {
        let mut bytes = raw.map_err(io_error)?;
        // Match `BufRead::lines`, which also drops a trailing "\r"
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        lines.push(String::from_utf8(bytes).ok());
    }
    Ok(lines)
}


/// Parse one `country, weight, value` line into a validated parcel.
///
/// # Example
/// ```
/// use parcelindex::ingest::parse_parcel_line;
///
/// let parcel = parse_parcel_line("Canada, 500, 100").unwrap();
/// assert_eq!(parcel.country(), "canada");
/// assert_eq!(parcel.weight(), 500.0);
///
/// assert!(parse_parcel_line("Canada, 5, 100").is_err());
/// ```
pub fn parse_parcel_line(line: &str) -> Result<Parcel, ParseError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    match fields.as_slice() {
        [country, weight, value] => validate_parcel(country, weight, value),
        _ => Err(ParseError::FieldCount { found: fields.len() }),
    }
}


/// Validate raw field text and build a parcel from it.
///
/// Shared by the file loader and the interactive `ADD` command so both
/// apply the same rules.
///
/// # Returns
///
/// The parcel, or the first problem found: empty country, then weight,
/// then value.
pub fn validate_parcel(country: &str, weight: &str, value: &str) -> Result<Parcel, ParseError> {
    let country = country.trim();
    if country.is_empty() {
        return Err(ParseError::EmptyCountry);
    }

    let weight = parse_field("weight", weight, &WEIGHT_RANGE)?;
    let value = parse_field("value", value, &VALUE_RANGE)?;
    Ok(Parcel::new(country, weight, value))
}


fn parse_field(
    field: &'static str,
    raw: &str,
    range: &RangeInclusive<f64>,
) -> Result<f64, ParseError> {
    let raw = raw.trim();
    let number = raw
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber {
            field,
            raw: raw.to_string(),
        })?;

    if !range.contains(&number) {
        return Err(ParseError::OutOfRange {
            field,
            value: number,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(number)
}


/// Parse and insert each line, skipping blank and invalid ones.
///
/// Line numbers in warnings are 1-based.
pub fn load_lines<I, S>(index: &mut ParcelIndex, lines: I) -> LoadReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    load_entries(index, lines.into_iter().map(Some))
}


// `None` entries are lines that could not be decoded; they count as
// skipped but still advance the line number.
fn load_entries<I, S>(index: &mut ParcelIndex, lines: I) -> LoadReport
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut report = LoadReport::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let Some(line) = line else {
            warn!(line = idx + 1, "line is not valid UTF-8, skipped");
            report.skipped += 1;
            continue;
        };

        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        match parse_parcel_line(line) {
            Ok(parcel) => {
                index.insert_parcel(parcel);
                report.loaded += 1;
            }
            Err(e) => {
                warn!(line = idx + 1, error = %e, record = line, "invalid parcel skipped");
                report.skipped += 1;
            }
        }
    }

    debug!(loaded = report.loaded, skipped = report.skipped, "lines ingested");
    report
}


/// Read `path` and load every valid parcel into `index`.
///
/// # Arguments
///
/// * `index` - Index that receives the parcels.
/// * `path`  - Data file, one `country, weight, value` per line.
///
/// # Returns
///
/// How many parcels were inserted and how many lines were rejected,
/// or [`IngestError::Io`] if the file cannot be read.
pub fn load_file(index: &mut ParcelIndex, path: &Path) -> Result<LoadReport, IngestError> {
    let lines = read_lines(path)?;
    Ok(load_entries(index, lines))
}
