use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Position {position} out of range 0..={max} {location}")]
    PositionOutOfRange {
        position: i32,
        max: i32,
        location: ErrorLocation,
    },

    #[error("Invalid reference: {message} {location}")]
    InvalidReference {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid board kind: {value} {location}")]
    InvalidBoardKind {
        value: String,
        location: ErrorLocation,
    },

    #[error("Activity metadata error: {source} {location}")]
    ActivityMetadata {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
