//! Error types for the coffee record conversion pipeline.
//!
//! - [`CsvError`] - reading and decoding the input CSV
//! - [`RecordError`] - turning one data row into a coffee record
//! - [`ConvertError`] - top-level run errors (paths, output, wrapped errors)
//!
//! Every error is terminal for the run: the pipeline never skips a row.
//! Conversion is automatic via `From` implementations, so `?` works across
//! the layers.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Reading Errors
// =============================================================================

/// Errors while reading the input CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to decode the raw bytes.
    #[error("Failed to decode input as {encoding}")]
    EncodingError { encoding: String },

    /// The csv reader rejected the input.
    #[error("Invalid CSV at line {line}: {message}")]
    ParseError { line: u64, message: String },
}

// =============================================================================
// Record Errors
// =============================================================================

/// Errors while building a coffee record from one data row.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    /// The row does not carry exactly the expected number of fields.
    #[error("Line {line}: expected {expected} fields, found {found}")]
    ArityMismatch {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A decimal field did not parse after comma normalization.
    #[error("Line {line}, field '{field}' (value '{value}'): not a valid decimal number")]
    MalformedDecimal {
        line: u64,
        field: &'static str,
        value: String,
    },
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the error type returned by [`crate::transform::pipeline`] entry
/// points and printed by the binary before exiting non-zero.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input path is not an existing file.
    #[error("input file {} does not exist", .0.display())]
    InputNotFound(PathBuf),

    /// Output path is already taken.
    #[error("output file {} already exists", .0.display())]
    OutputExists(PathBuf),

    /// CSV reading error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Row transformation error.
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write the output file.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for record operations.
pub type RecordResult<T> = Result<T, RecordError>;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
