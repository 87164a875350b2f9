//! Lenient numeric parsing for measurement input.
//!
//! Form fields arrive as numbers, numeric strings, empty strings or `null`.
//! All of them normalise to `Option<f64>`, and a non-finite value counts as
//! absent, so NaN never enters a measurement set.

use serde::{Deserialize, Deserializer};

/// Parse a raw form value into a measurement.
///
/// Accepts a comma as decimal separator (`"72,5"`) when no dot is present.
/// Empty, whitespace-only and unparsable input yield `None`.
pub fn parse_measurement(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replace(',', ".").parse::<f64>()
    } else {
        trimmed.parse::<f64>()
    };

    parsed.ok().and_then(finite)
}

/// `Some(value)` when the value is finite, `None` otherwise.
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

/// Serde adapter for optional measurement fields.
///
/// Use with `#[serde(default, deserialize_with = "crate::parse::lenient")]`.
pub fn lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawValue>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawValue::Number(v)) => finite(v),
        Some(RawValue::Text(s)) => parse_measurement(&s),
        Some(RawValue::Other(_)) | None => None,
    })
}
