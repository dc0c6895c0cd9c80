//! Date-of-entry filter.

use chrono::Datelike;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::RecordFilter;
use super::params;
use crate::catalog::{ColumnMap, ProductRecord};

/// Calendar granularity of the date filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateMode {
    /// Year and month must both match.
    #[default]
    Custom,
    /// Only the year must match.
    Year,
}

impl From<&str> for DateMode {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("year") {
            Self::Year
        } else {
            Self::Custom
        }
    }
}

impl<'de> Deserialize<'de> for DateMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(mode)) => Self::from(mode.as_str()),
            _ => Self::default(),
        })
    }
}

/// Filter on the record's precomputed entry date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFilter {
    /// Whether the filter applies.
    pub active: bool,
    /// Calendar granularity.
    pub mode: DateMode,
    /// Required year.
    #[serde(deserialize_with = "params::number")]
    pub year: Option<i32>,
    /// Required month, 0-indexed (0 = January).
    #[serde(deserialize_with = "params::number")]
    pub month: Option<u32>,
}

impl DateFilter {
    /// Active filter on a year and 0-indexed month.
    #[must_use]
    pub const fn custom(year: i32, month0: u32) -> Self {
        Self {
            active: true,
            mode: DateMode::Custom,
            year: Some(year),
            month: Some(month0),
        }
    }

    /// Active filter on a whole year.
    #[must_use]
    pub const fn year(year: i32) -> Self {
        Self {
            active: true,
            mode: DateMode::Year,
            year: Some(year),
            month: None,
        }
    }
}

impl RecordFilter for DateFilter {
    fn is_active(&self) -> bool {
        self.active
    }

    fn matches(&self, record: &ProductRecord, _columns: &ColumnMap) -> bool {
        let Some(date) = record.entry_date else {
            return false;
        };

        let year_matches = self.year.is_none_or(|year| date.year() == year);
        match self.mode {
            DateMode::Year => year_matches,
            DateMode::Custom => {
                year_matches && self.month.is_none_or(|month| date.month0() == month)
            }
        }
    }
}
