//! Entry date parsing.

use chrono::{DateTime, NaiveDate};

/// Parses a raw catalog date into a calendar date.
///
/// Accepts `DD/MM/YYYY` (single digit day and month allowed), `YYYY-MM-DD`
/// and RFC 3339 timestamps. Anything else yields `None`.
#[must_use]
pub fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
