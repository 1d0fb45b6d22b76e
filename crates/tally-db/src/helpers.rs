//! Row parsing helpers.
//!
//! Timestamps are stored as RFC 3339 TEXT; `SQLite`'s own
//! `datetime('now')` format is accepted too so hand-inserted rows still parse.

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Decode an INTEGER 0/1 column as a boolean.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for any other value.
pub fn parse_flag(value: i64) -> Result<bool, DatabaseError> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(DatabaseError::Query(format!(
            "Expected 0 or 1 for boolean column, got {other}"
        ))),
    }
}
