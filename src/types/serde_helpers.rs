//! Custom serde helpers for Tauros' loosely typed payloads.
//!
//! Tauros returns the same numeric field as a JSON number on one endpoint and
//! as a string on another, and sometimes as an empty string.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

fn parse_decimal(text: &str) -> Result<Decimal, String> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|e| format!("invalid decimal {text:?}: {e}"))
}

fn decimal_from_value(value: &Value) -> Result<Option<Decimal>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => parse_decimal(s.trim()).map(Some),
        Value::Number(n) => parse_decimal(&n.to_string()).map(Some),
        other => Err(format!("expected a decimal string or number, got {other}")),
    }
}

/// Deserialize a decimal given either as a JSON number or a string.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use rust_decimal::Decimal;
/// use tauros_api_client::types::serde_helpers::decimal;
///
/// #[derive(Deserialize, Debug)]
/// struct Balance {
///     #[serde(deserialize_with = "decimal::deserialize")]
///     available: Decimal,
/// }
///
/// let a: Balance = serde_json::from_str(r#"{"available":"1.50"}"#).unwrap();
/// let b: Balance = serde_json::from_str(r#"{"available":1.50}"#).unwrap();
/// assert_eq!(a.available, b.available);
/// ```
pub mod decimal {
    use super::*;

    /// Deserialize a required decimal.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decimal_from_value(&value)
            .map_err(de::Error::custom)?
            .ok_or_else(|| de::Error::custom("expected a decimal, got null or empty string"))
    }
}

/// Deserialize an optional decimal; `null`, `""` and a missing field become `None`.
///
/// Use together with `#[serde(default)]`.
pub mod optional_decimal {
    use super::*;

    /// Deserialize an optional decimal.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decimal_from_value(&value).map_err(de::Error::custom)
    }
}

/// Deserialize empty strings as `None`.
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize an optional string, mapping `""` and `null` to `None`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        Ok(value.filter(|s| !s.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "decimal::deserialize")]
        required: Decimal,
        #[serde(default, deserialize_with = "optional_decimal::deserialize")]
        optional: Option<Decimal>,
        #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
        text: Option<String>,
    }

    #[test]
    fn test_decimal_from_string_and_number() {
        let s: Sample = serde_json::from_str(r#"{"required":"0.00100000"}"#).unwrap();
        assert_eq!(s.required, Decimal::new(1, 3));
        let s: Sample = serde_json::from_str(r#"{"required":250000.5}"#).unwrap();
        assert_eq!(s.required, Decimal::new(2500005, 1));
    }

    #[test]
    fn test_decimal_keeps_precision() {
        let s: Sample = serde_json::from_str(r#"{"required":0.12345678901234567890}"#).unwrap();
        assert_eq!(s.required.to_string(), "0.12345678901234567890");
    }

    #[test]
    fn test_decimal_scientific() {
        let s: Sample = serde_json::from_str(r#"{"required":"1e-7"}"#).unwrap();
        assert_eq!(s.required, Decimal::new(1, 7));
    }

    #[test]
    fn test_required_decimal_rejects_empty() {
        assert!(serde_json::from_str::<Sample>(r#"{"required":""}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"required":true}"#).is_err());
    }

    #[test]
    fn test_optional_decimal() {
        let s: Sample = serde_json::from_str(r#"{"required":1}"#).unwrap();
        assert!(s.optional.is_none());
        let s: Sample = serde_json::from_str(r#"{"required":1,"optional":""}"#).unwrap();
        assert!(s.optional.is_none());
        let s: Sample = serde_json::from_str(r#"{"required":1,"optional":null}"#).unwrap();
        assert!(s.optional.is_none());
        let s: Sample = serde_json::from_str(r#"{"required":1,"optional":"2.5"}"#).unwrap();
        assert_eq!(s.optional, Some(Decimal::new(25, 1)));
    }

    #[test]
    fn test_empty_string_as_none() {
        let s: Sample = serde_json::from_str(r#"{"required":1,"text":""}"#).unwrap();
        assert!(s.text.is_none());
        let s: Sample = serde_json::from_str(r#"{"required":1,"text":"x"}"#).unwrap();
        assert_eq!(s.text.as_deref(), Some("x"));
    }
}
