//! Transformation module.
//!
//! - Record: flat row to nested coffee record
//! - Pipeline: whole-file conversion, rendering and output

pub mod pipeline;
pub mod record;

pub use pipeline::*;
pub use record::parse_decimal;
