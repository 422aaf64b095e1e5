//! Domain models for the coffee record conversion.
//!
//! - [`RawRow`] - one data row of the input CSV, fields still textual
//! - [`CoffeeRecord`] - the nested output document
//! - [`Blend`] - bean composition of a coffee
//! - [`Taste`] - taste profile of a coffee
//!
//! All numeric values are [`BigDecimal`]s, serialized as bare JSON numbers
//! through the [`decimal`] helpers so no binary rounding ever happens.

pub mod decimal;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::error::{RecordError, RecordResult};

/// Number of fields in every data row.
pub const FIELD_COUNT: usize = 9;

// =============================================================================
// Raw Row
// =============================================================================

/// A data row of the input CSV with its 9 fields, untouched.
///
/// Fields are positional in the input; here they get names so nothing
/// downstream indexes into a slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line in the source file, used in error messages.
    pub line: u64,
    pub roastery: String,
    pub name: String,
    pub price_eur_kg: String,
    pub arabica: String,
    pub robusta: String,
    pub strength: String,
    pub caffeine: String,
    pub roast_level: String,
    pub crema: String,
}

impl RawRow {
    /// Build a row from its fields, rejecting anything but exactly
    /// [`FIELD_COUNT`] of them.
    pub fn from_fields(line: u64, fields: Vec<String>) -> RecordResult<Self> {
        let found = fields.len();
        let fields: [String; FIELD_COUNT] =
            fields.try_into().map_err(|_| RecordError::ArityMismatch {
                line,
                expected: FIELD_COUNT,
                found,
            })?;

        let [roastery, name, price_eur_kg, arabica, robusta, strength, caffeine, roast_level, crema] =
            fields;

        Ok(Self {
            line,
            roastery,
            name,
            price_eur_kg,
            arabica,
            robusta,
            strength,
            caffeine,
            roast_level,
            crema,
        })
    }
}

// =============================================================================
// Nested Coffee Record
// =============================================================================

/// Bean composition, usually percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blend {
    #[serde(with = "decimal")]
    pub arabica: BigDecimal,
    #[serde(with = "decimal")]
    pub robusta: BigDecimal,
}

/// Taste profile scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taste {
    #[serde(with = "decimal")]
    pub strength: BigDecimal,
    #[serde(with = "decimal")]
    pub caffeine: BigDecimal,
    #[serde(with = "decimal")]
    pub roast_level: BigDecimal,
    #[serde(with = "decimal")]
    pub crema: BigDecimal,
}

/// A coffee product as emitted in the output document.
///
/// Field order here is the key order of the emitted JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeRecord {
    pub roastery: String,
    pub name: String,
    /// Price in euro per kilogram.
    #[serde(with = "decimal")]
    pub price_eur_kg: BigDecimal,
    pub blend: Blend,
    pub taste: Taste,
}

// =============================================================================
// Tests
// =============================================================================
