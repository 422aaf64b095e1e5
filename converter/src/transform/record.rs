//! Turn a flat CSV row into a nested coffee record.
//!
//! ```text
//! CSV row (9 flat fields)            →  Nested record
//! ┌───────────────────────────────┐    ┌──────────────────────────────┐
//! │ roastery, name, priceEurKg    │    │ roastery, name, priceEurKg   │
//! │ arabica, robusta              │ →  │ blend { arabica, robusta }   │
//! │ strength, caffeine,           │    │ taste { strength, caffeine,  │
//! │ roastLevel, crema             │    │         roastLevel, crema }  │
//! └───────────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! Text fields are trimmed. Numeric fields accept a decimal comma
//! (`18,5`) as well as a decimal point and become exact [`BigDecimal`]s.

use bigdecimal::{BigDecimal, ParseBigDecimalError};
use std::str::FromStr;

use crate::error::{RecordError, RecordResult};
use crate::models::{Blend, CoffeeRecord, RawRow, Taste};

/// Parse a numeric field, reading any `,` as the decimal separator.
///
/// Surrounding whitespace is ignored. The result is exact: `"0,1"` is
/// one tenth, not the nearest binary float.
pub fn parse_decimal(raw: &str) -> Result<BigDecimal, ParseBigDecimalError> {
    let normalized = raw.replace(',', ".");
    BigDecimal::from_str(normalized.trim())
}

impl RawRow {
    /// Build the nested record for this row.
    ///
    /// Fails on the first numeric field that does not parse.
    pub fn hierarchic(&self) -> RecordResult<CoffeeRecord> {
        Ok(CoffeeRecord {
            roastery: self.roastery.trim().to_string(),
            name: self.name.trim().to_string(),
            price_eur_kg: self.decimal("priceEurKg", &self.price_eur_kg)?,
            blend: Blend {
                arabica: self.decimal("arabica", &self.arabica)?,
                robusta: self.decimal("robusta", &self.robusta)?,
            },
            taste: Taste {
                strength: self.decimal("strength", &self.strength)?,
                caffeine: self.decimal("caffeine", &self.caffeine)?,
                roast_level: self.decimal("roastLevel", &self.roast_level)?,
                crema: self.decimal("crema", &self.crema)?,
            },
        })
    }

    fn decimal(&self, field: &'static str, raw: &str) -> RecordResult<BigDecimal> {
        parse_decimal(raw).map_err(|_| RecordError::MalformedDecimal {
            line: self.line,
            field,
            value: raw.to_string(),
        })
    }
}
