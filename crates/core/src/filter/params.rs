//! Lenient parameter decoding.
//!
//! Filter parameters come straight from form controls. A missing, null,
//! blank or wrongly typed parameter means "no constraint" and never fails
//! deserialization.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::catalog::safe_text;

/// Normalises a text parameter: trimmed, `None` when blank.
#[must_use]
pub fn constraint(param: Option<&str>) -> Option<&str> {
    param.map(str::trim).filter(|p| !p.is_empty())
}

/// Deserializes a text parameter from a string, number or null.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let text = safe_text(value.as_ref());
    Ok((!text.is_empty()).then_some(text))
}

/// Deserializes a numeric parameter from a number, numeric string or null.
pub fn number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(parsed.and_then(|n| T::try_from(n).ok()))
}
