//! Catalog snapshot and request loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tessera_core::catalog::ProductRecord;
use tessera_core::reports::ReportRequest;
use tessera_shared::{AppError, AppResult};
use tracing::{debug, info};

fn read(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => AppError::NotFound(path.display().to_string()),
        _ => AppError::Internal(format!("{}: {err}", path.display())),
    })
}

/// Parses a catalog snapshot and attaches entry dates from `date_field`.
///
/// Accepts either a bare array of records or an object wrapping it under
/// `data`.
pub fn parse_catalog(raw: &str, date_field: &str) -> AppResult<Vec<ProductRecord>> {
    let value: Value =
        serde_json::from_str(raw).map_err(|err| AppError::Validation(format!("catalog: {err}")))?;
    let rows = match value {
        Value::Object(mut object) => object.remove("data").unwrap_or(Value::Null),
        other => other,
    };

    let mut records: Vec<ProductRecord> = serde_json::from_value(rows)
        .map_err(|err| AppError::Validation(format!("catalog: {err}")))?;

    let undated = records
        .iter_mut()
        .map(|record| record.attach_entry_date(date_field))
        .filter(|dated| !dated)
        .count();
    debug!(records = records.len(), undated, date_field, "Parsed catalog");

    Ok(records)
}

/// Loads a catalog snapshot from disk.
pub fn load_catalog(path: &Path, date_field: &str) -> AppResult<Vec<ProductRecord>> {
    let records = parse_catalog(&read(path)?, date_field)?;
    info!(path = %path.display(), records = records.len(), "Catalog loaded");
    Ok(records)
}

/// Loads a report request from disk.
pub fn load_request(path: &Path) -> AppResult<ReportRequest> {
    serde_json::from_str(&read(path)?)
        .map_err(|err| AppError::Validation(format!("request {}: {err}", path.display())))
}
