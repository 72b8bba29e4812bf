//! Decode helpers shared by the repositories.
//!
//! SQLite stores UUIDs as TEXT and timestamps as unix seconds; every decode
//! failure names the offending column so a corrupt row is diagnosable.

use crate::{DbError, error::Result as DbErrorResult};

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub(crate) fn uuid_field(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| DbError::decode(format!("Invalid UUID in {}: {}", column, e)))
}

pub(crate) fn opt_uuid_field(value: Option<&str>, column: &str) -> DbErrorResult<Option<Uuid>> {
    value.map(|v| uuid_field(v, column)).transpose()
}

pub(crate) fn timestamp_field(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0)
        .ok_or_else(|| DbError::decode(format!("Invalid timestamp in {}", column)))
}

pub(crate) fn opt_timestamp_field(
    value: Option<i64>,
    column: &str,
) -> DbErrorResult<Option<DateTime<Utc>>> {
    value.map(|v| timestamp_field(v, column)).transpose()
}
