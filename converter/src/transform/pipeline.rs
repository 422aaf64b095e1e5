//! High-level API for coffee CSV to JSON conversion.
//!
//! Combines parsing, row transformation and rendering. The first failing
//! row aborts the whole conversion: no partial result is returned and no
//! output file is written.
//!
//! # Example
//!
//! ```rust,ignore
//! use coffeeconv::{convert_file, render_json, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = convert_file(Path::new("coffee.csv"), &ConvertOptions::default())?;
//!     println!("{}", render_json(&report.records)?);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ConvertError, ConvertResult, RecordResult};
use crate::models::{CoffeeRecord, RawRow};
use crate::parser::{parse_bytes, parse_csv_file, CsvRow, ParseResult};

/// Options for a conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Field delimiter of the input CSV
    pub delimiter: u8,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Clone)]
pub struct ConvertReport {
    /// Nested records, one per data row, in input order
    pub records: Vec<CoffeeRecord>,

    /// Number of data rows read (header excluded)
    pub rows_read: usize,

    /// Encoding the input was decoded with
    pub encoding: String,

    /// Cells of the skipped header row
    pub headers: Vec<String>,
}

/// Fail unless `input` is an existing file and nothing exists at `output`.
///
/// Runs before any row is read.
pub fn check_paths(input: &Path, output: &Path) -> ConvertResult<()> {
    if !input.is_file() {
        return Err(ConvertError::InputNotFound(input.to_path_buf()));
    }
    if output.exists() {
        return Err(ConvertError::OutputExists(output.to_path_buf()));
    }
    Ok(())
}

/// Transform rows in order, stopping at the first failure.
pub fn convert_rows(rows: &[CsvRow]) -> RecordResult<Vec<CoffeeRecord>> {
    rows.iter()
        .map(|row| -> RecordResult<CoffeeRecord> {
            let raw = RawRow::from_fields(row.line, row.fields.clone())?;
            let record = raw.hierarchic()?;
            debug!(line = row.line, roastery = %record.roastery, name = %record.name, "converted row");
            Ok(record)
        })
        .collect()
}

/// Convert a CSV file into nested coffee records.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> ConvertResult<ConvertReport> {
    info!(path = %path.display(), "reading coffee CSV");
    let parse_result = parse_csv_file(path, options.delimiter)?;
    convert_parsed(parse_result)
}

/// Convert CSV bytes into nested coffee records.
///
/// Same as [`convert_file`] but takes the raw content.
pub fn convert_bytes(bytes: &[u8], options: &ConvertOptions) -> ConvertResult<ConvertReport> {
    let parse_result = parse_bytes(bytes, options.delimiter)?;
    convert_parsed(parse_result)
}

fn convert_parsed(parse_result: ParseResult) -> ConvertResult<ConvertReport> {
    info!(
        rows = parse_result.rows.len(),
        encoding = %parse_result.encoding,
        "parsed coffee CSV"
    );

    let records = convert_rows(&parse_result.rows)?;
    info!(records = records.len(), "converted coffee records");

    Ok(ConvertReport {
        rows_read: parse_result.rows.len(),
        records,
        encoding: parse_result.encoding,
        headers: parse_result.headers,
    })
}

/// Render records as a JSON array.
///
/// Two-space indentation, non-ASCII text written as is, no trailing newline.
pub fn render_json(records: &[CoffeeRecord]) -> ConvertResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write the rendered document to a new file.
///
/// Never truncates: an existing file at `path` is an error even if it
/// appeared after [`check_paths`].
pub fn write_output(path: &Path, content: &str) -> ConvertResult<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => ConvertError::OutputExists(path.to_path_buf()),
            _ => ConvertError::Write {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

    file.write_all(content.as_bytes())
        .map_err(|e| ConvertError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    info!(path = %path.display(), bytes = content.len(), "wrote coffee JSON");
    Ok(())
}
