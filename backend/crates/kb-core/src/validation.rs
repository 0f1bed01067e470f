//! Input validation shared by the store and the API layer.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Trim and strip control characters (newlines and tabs are kept).
pub fn sanitize_string(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Sanitize a required text field and enforce `1..=max_len` characters.
#[track_caller]
pub fn required_text(value: &str, field: &str, max_len: usize) -> CoreErrorResult<String> {
    let sanitized = sanitize_string(value);
    if sanitized.is_empty() {
        return Err(validation(format!("{field} is required"), field));
    }
    if sanitized.chars().count() > max_len {
        return Err(validation(
            format!("{field} must be at most {max_len} characters"),
            field,
        ));
    }
    Ok(sanitized)
}

/// Sanitize an optional text field. Blank input clears the field.
#[track_caller]
pub fn optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> CoreErrorResult<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let sanitized = sanitize_string(value);
    if sanitized.is_empty() {
        return Ok(None);
    }
    if sanitized.chars().count() > max_len {
        return Err(validation(
            format!("{field} must be at most {max_len} characters"),
            field,
        ));
    }
    Ok(Some(sanitized))
}

/// `#rgb` or `#rrggbb`
#[track_caller]
pub fn color(value: &str, field: &str) -> CoreErrorResult<String> {
    let hex = value.strip_prefix('#').unwrap_or_default();
    let valid = matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(validation(
            format!("{field} must be a hex color like #1a2b3c, got '{value}'"),
            field,
        ));
    }
    Ok(value.to_ascii_lowercase())
}

#[track_caller]
pub fn wip_limit(value: Option<i32>) -> CoreErrorResult<Option<i32>> {
    match value {
        Some(limit) if limit < 1 => Err(validation(
            format!("wip_limit must be positive, got {limit}"),
            "wip_limit",
        )),
        other => Ok(other),
    }
}

/// Sanitize labels, dropping blanks and repeats while keeping first-seen order.
#[track_caller]
pub fn labels(values: &[String], max_count: usize, max_len: usize) -> CoreErrorResult<Vec<String>> {
    let mut cleaned: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let label = sanitize_string(value);
        if label.is_empty() || cleaned.contains(&label) {
            continue;
        }
        if label.chars().count() > max_len {
            return Err(validation(
                format!("labels must be at most {max_len} characters each"),
                "labels",
            ));
        }
        cleaned.push(label);
    }
    if cleaned.len() > max_count {
        return Err(validation(
            format!("at most {max_count} labels are allowed"),
            "labels",
        ));
    }
    Ok(cleaned)
}

#[track_caller]
fn validation(message: String, field: &str) -> CoreError {
    CoreError::Validation {
        message,
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    }
}
