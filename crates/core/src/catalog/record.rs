//! Product record type.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::date::parse_entry_date;

/// One catalog item (SKU).
///
/// Fields are kept as raw JSON values keyed by the catalog's own field
/// names; the logical meaning of each key is resolved through a
/// [`ColumnMap`](super::ColumnMap). The precomputed entry date travels
/// alongside the raw fields under `_dateObj`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Precomputed date of entry into the catalog.
    #[serde(
        rename = "_dateObj",
        default,
        deserialize_with = "lenient_entry_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub entry_date: Option<NaiveDate>,
    /// Raw record fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl ProductRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Sets the precomputed entry date.
    #[must_use]
    pub fn with_entry_date(mut self, date: NaiveDate) -> Self {
        self.entry_date = Some(date);
        self
    }

    /// Returns the raw value of a field.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the display text of a field (see [`safe_text`]).
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        safe_text(self.value(key))
    }

    /// Fills `entry_date` from a raw date field when it is not already set.
    ///
    /// Returns true if the record carries an entry date afterwards.
    pub fn attach_entry_date(&mut self, key: &str) -> bool {
        if self.entry_date.is_none() {
            self.entry_date = parse_entry_date(&self.text(key));
        }
        self.entry_date.is_some()
    }
}

// Exported snapshots carry `_dateObj` as a full timestamp; anything
// unreadable counts as undated.
fn lenient_entry_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(parse_entry_date))
}

/// Null-safe, whitespace-safe text of a record value.
///
/// Absent and null values become the empty string, never a literal
/// `null` token.
#[must_use]
pub fn safe_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string().trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(None, "")]
    #[case(Some(json!(null)), "")]
    #[case(Some(json!("  60x60 ")), "60x60")]
    #[case(Some(json!("   ")), "")]
    #[case(Some(json!(9.5)), "9.5")]
    #[case(Some(json!(12)), "12")]
    #[case(Some(json!(true)), "true")]
    fn test_safe_text(#[case] value: Option<Value>, #[case] expected: &str) {
        assert_eq!(safe_text(value.as_ref()), expected);
    }

    #[test]
    fn test_deserialize_with_date() {
        let record: ProductRecord = serde_json::from_value(json!({
            "Nombre": "Item 1",
            "Espesor_mm": 10,
            "_dateObj": "2024-06-01"
        }))
        .unwrap();

        assert_eq!(record.entry_date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(record.text("Nombre"), "Item 1");
        assert_eq!(record.text("Espesor_mm"), "10");
        assert!(!record.fields.contains_key("_dateObj"));
    }

    #[rstest]
    #[case(json!("2024-06-01T00:00:00.000Z"), NaiveDate::from_ymd_opt(2024, 6, 1))]
    #[case(json!("01/06/2024"), NaiveDate::from_ymd_opt(2024, 6, 1))]
    #[case(json!("not a date"), None)]
    #[case(json!(null), None)]
    #[case(json!(1_717_200_000), None)]
    fn test_deserialize_exported_date(
        #[case] raw: Value,
        #[case] expected: Option<NaiveDate>,
    ) {
        let record: ProductRecord =
            serde_json::from_value(json!({"Nombre": "Item 1", "_dateObj": raw})).unwrap();
        assert_eq!(record.entry_date, expected);
        assert_eq!(record.text("Nombre"), "Item 1");
    }

    #[test]
    fn test_deserialize_without_date() {
        let record: ProductRecord =
            serde_json::from_value(json!({"Nombre": "Item 3"})).unwrap();
        assert!(record.entry_date.is_none());
    }

    #[test]
    fn test_attach_entry_date() {
        let mut record = ProductRecord::new().with_field("Fecha_de_alta", "15/03/2022");
        assert!(record.attach_entry_date("Fecha_de_alta"));
        assert_eq!(record.entry_date, NaiveDate::from_ymd_opt(2022, 3, 15));

        let mut undated = ProductRecord::new().with_field("Fecha_de_alta", "pending");
        assert!(!undated.attach_entry_date("Fecha_de_alta"));
    }

    #[test]
    fn test_attach_keeps_existing_date() {
        let existing = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let mut record = ProductRecord::new()
            .with_field("Fecha_de_alta", "2024-06-01")
            .with_entry_date(existing);
        assert!(record.attach_entry_date("Fecha_de_alta"));
        assert_eq!(record.entry_date, Some(existing));
    }
}
