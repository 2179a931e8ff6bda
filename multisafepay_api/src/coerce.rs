//! Normalization of numeric fields the API emits either as numbers or as strings.
//!
//! Depending on the endpoint and the state of an order, MultiSafepay returns
//! identifiers and amounts as `"235"` or as `235`. Response models decode those
//! fields through [`flexible_int`] so callers always see an `i64`.

use serde_json::Value;

/// Converts a loosely typed JSON value into an integer.
///
/// Integers are returned unchanged, fractional numbers are truncated toward
/// zero and strings are parsed as base-10 integers. Anything else (including
/// strings that do not parse) becomes `0`.
pub fn coerce_to_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if let Some(u) = n.as_u64() {
                i64::try_from(u).unwrap_or(i64::MAX)
            } else {
                // `as` truncates toward zero and saturates; NaN cannot occur in JSON.
                n.as_f64().map(|f| f as i64).unwrap_or(0)
            }
        }
        Value::String(s) => s.parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

/// Serde adapter for integer fields with an inconsistent wire type.
///
/// Use with `#[serde(default, with = "crate::coerce::flexible_int")]`.
pub mod flexible_int {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(super::coerce_to_int(&raw))
    }
}
