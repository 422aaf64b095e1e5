//! # Coffeeconv - coffee record CSV to nested JSON
//!
//! Coffeeconv reads a flat CSV export of coffee products and writes a JSON
//! array of nested records, keeping every price and score as an exact
//! decimal.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Transform  │────▶│  JSON array │
//! │  (UTF8/ISO) │     │ (skip head) │     │ (9 → nested)│     │  (2 spaces) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coffeeconv::{convert_file, render_json, ConvertOptions};
//!
//! let report = convert_file("coffee.csv".as_ref(), &ConvertOptions::default()).unwrap();
//! println!("{}", render_json(&report.records).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Raw rows and nested coffee records
//! - [`parser`] - CSV reading with encoding detection
//! - [`transform`] - Row transformation and the conversion pipeline

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConvertError, CsvError, RecordError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Blend, CoffeeRecord, RawRow, Taste, FIELD_COUNT};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_encoding, parse_bytes, parse_csv, parse_csv_file, CsvRow, ParseResult,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::{
    check_paths, convert_bytes, convert_file, convert_rows, parse_decimal, render_json,
    write_output, ConvertOptions, ConvertReport,
};
