//! Serde helpers writing [`BigDecimal`] as a bare JSON number.
//!
//! The number text is the decimal's own `Display` output, passed through a
//! [`RawValue`], so `18.50` stays `18.50` and nothing goes through `f64`.
//! Reading takes the raw number text back, making the round trip exact.
//!
//! Use with `#[serde(with = "decimal")]`.

use bigdecimal::BigDecimal;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::str::FromStr;

pub fn serialize<S: Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
    let raw = RawValue::from_string(value.to_string()).map_err(S::Error::custom)?;
    raw.serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
    let raw = Box::<RawValue>::deserialize(deserializer)?;
    BigDecimal::from_str(raw.get())
        .map_err(|e| D::Error::custom(format!("invalid decimal '{}': {}", raw.get(), e)))
}
