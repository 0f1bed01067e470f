use crate::{ApiError, ApiResult};

use uuid::Uuid;

/// Parse an id supplied in a request body, naming the field on failure.
pub fn parse_id(value: &str, field: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(value.trim())
        .map_err(|e| ApiError::validation(format!("{field} must be a UUID: {e}"), field))
}

pub fn parse_ids(values: &[String], field: &str) -> ApiResult<Vec<Uuid>> {
    values.iter().map(|value| parse_id(value, field)).collect()
}
