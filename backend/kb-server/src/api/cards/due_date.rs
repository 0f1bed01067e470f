use crate::{ApiError, ApiResult};

use chrono::{DateTime, Utc};

/// Unix seconds to a timestamp, rejecting values chrono cannot represent.
pub fn due_date(seconds: i64) -> ApiResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
        ApiError::validation(format!("due_date {seconds} is out of range"), "due_date")
    })
}
