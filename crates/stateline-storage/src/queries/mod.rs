//! Raw SQL operations, one module per table family.

pub mod event_ops;
pub mod interval_ops;
pub mod sparse_ops;

use chrono::{DateTime, NaiveDateTime, Utc};

use stateline_core::errors::{StateResult, StorageError};

/// Parse a source timestamp column. RFC 3339 is the native encoding;
/// SQLite `datetime()` output (space separator, no offset) is accepted
/// as UTC.
pub(crate) fn parse_timestamp(value: &str) -> StateResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    Err(StorageError::InvalidTimestamp {
        value: value.to_string(),
    }
    .into())
}
