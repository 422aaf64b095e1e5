//! CSV reader for coffee exports, with encoding detection.
//!
//! Splits the input into positional rows and drops the first row as the
//! header. Field meaning and arity are left to [`crate::models`].

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::{CsvError, CsvResult};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// One CSV row with its source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// 1-based line in the source where the row starts.
    pub line: u64,
    pub fields: Vec<String>,
}

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Data rows, header excluded, in input order
    pub rows: Vec<CsvRow>,
    /// Cells of the skipped first row
    pub headers: Vec<String>,
    /// Detected or used encoding
    pub encoding: String,
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 is taken as is; anything else goes through chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(bytes).0;
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the specified encoding.
///
/// A leading UTF-8 byte order mark is dropped.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let decoder = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => {
            return String::from_utf8(bytes.to_vec()).map_err(|_| CsvError::EncodingError {
                encoding: encoding.to_string(),
            });
        }
        // chardet reports cp1252 input as iso-8859-1
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252
        }
        other => encoding_rs::Encoding::for_label(other.as_bytes()).ok_or_else(|| {
            CsvError::EncodingError {
                encoding: encoding.to_string(),
            }
        })?,
    };

    let (decoded, _, had_errors) = decoder.decode(bytes);
    if had_errors {
        return Err(CsvError::EncodingError {
            encoding: encoding.to_string(),
        });
    }
    Ok(decoded.into_owned())
}

/// Split CSV text into rows, skipping the first row unconditionally.
///
/// Rows may have any number of fields. Blank lines are ignored.
///
/// # Example
/// ```ignore
/// use coffeeconv::parse_csv;
///
/// let (headers, rows) = parse_csv("a,b\n1,\"2,5\"".as_bytes(), b',').unwrap();
///
/// assert_eq!(headers, vec!["a", "b"]);
/// assert_eq!(rows[0].fields, vec!["1", "2,5"]);
/// ```
pub fn parse_csv<R: Read>(reader: R, delimiter: u8) -> CsvResult<(Vec<String>, Vec<CsvRow>)> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut headers = Vec::new();
    let mut rows = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| CsvError::ParseError {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            message: e.to_string(),
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let fields: Vec<String> = record.iter().map(String::from).collect();

        if idx == 0 {
            debug!(line, columns = fields.len(), "skipping header row");
            headers = fields;
            continue;
        }

        rows.push(CsvRow { line, fields });
    }

    Ok((headers, rows))
}

/// Parse CSV bytes, detecting the encoding first.
pub fn parse_bytes(bytes: &[u8], delimiter: u8) -> CsvResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    debug!(%encoding, bytes = bytes.len(), "decoded input");

    let (headers, rows) = parse_csv(content.as_bytes(), delimiter)?;

    Ok(ParseResult {
        rows,
        headers,
        encoding,
    })
}

/// Parse a CSV file, detecting the encoding first.
pub fn parse_csv_file<P: AsRef<Path>>(path: P, delimiter: u8) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes(&bytes, delimiter)
}
