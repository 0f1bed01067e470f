use crate::DbError;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

#[track_caller]
pub(crate) fn uuid(value: &str, column: &str) -> Result<Uuid, DbError> {
    Uuid::parse_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid UUID in {column}: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn optional_uuid(value: Option<&str>, column: &str) -> Result<Option<Uuid>, DbError> {
    value.map(|v| uuid(v, column)).transpose()
}

#[track_caller]
pub(crate) fn timestamp(value: i64, column: &str) -> Result<DateTime<Utc>, DbError> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {column}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn int(value: i64, column: &str) -> Result<i32, DbError> {
    i32::try_from(value).map_err(|_| DbError::Initialization {
        message: format!("{column} out of range: {value}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parsed<T>(value: &str, column: &str) -> Result<T, DbError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| DbError::Initialization {
        message: format!("Invalid value in {column}: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
