//! REST API error types
//!
//! Every failure leaves the handler as one of these variants and is rendered
//! as `{ "error": { code, message, field? } }` with the matching status.

use crate::Metrics;

use kb_core::CoreError;
use kb_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed caller identity (401)
    #[error("Unauthenticated: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    /// Caller's role does not allow the operation (403)
    #[error("Access denied: {message} {location}")]
    AccessDenied {
        message: String,
        location: ErrorLocation,
    },

    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Id outside the scope it was used in (422)
    #[error("Invalid reference: {message} {location}")]
    InvalidReference {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Lock timeout or a busy database after retries (409)
    #[error("Concurrency conflict: {message} {location}")]
    ConcurrencyConflict {
        message: String,
        location: ErrorLocation,
    },

    /// Details are logged, never sent (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Validation failure not tied to a single field
    #[track_caller]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn access_denied(message: impl Into<String>) -> Self {
        ApiError::AccessDenied {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            ApiError::AccessDenied { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidReference { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::ConcurrencyConflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthenticated { .. } => "UNAUTHENTICATED",
            ApiError::AccessDenied { .. } => "ACCESS_DENIED",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::InvalidReference { .. } => "INVALID_REFERENCE",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::ConcurrencyConflict { .. } => "CONCURRENCY_CONFLICT",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }
        Metrics::new().error_returned(code);

        let (message, field) = match self {
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::Internal { .. } => ("Internal server error".to_string(), None),
            ApiError::Unauthenticated { message, .. }
            | ApiError::AccessDenied { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::InvalidReference { message, .. }
            | ApiError::ConcurrencyConflict { message, .. } => (message, None),
        };

        let body = ApiErrorBody {
            code: code.into(),
            message,
            field,
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Path ids are parsed by hand so a malformed one is a validation error
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::Validation {
            message: e.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(e: QueryRejection) -> Self {
        ApiError::Validation {
            message: e.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            CoreError::PositionOutOfRange { position, max, .. } => ApiError::Validation {
                message: format!("position {position} is outside 0..={max}"),
                field: Some("position".to_string()),
                location,
            },
            CoreError::InvalidReference { message, .. } => {
                ApiError::InvalidReference { message, location }
            }
            CoreError::InvalidRole { value, .. } => ApiError::Validation {
                message: format!("unknown role '{value}', expected owner, editor or viewer"),
                field: Some("role".to_string()),
                location,
            },
            CoreError::InvalidPriority { value, .. } => ApiError::Validation {
                message: format!("unknown priority '{value}', expected low, medium, high or urgent"),
                field: Some("priority".to_string()),
                location,
            },
            CoreError::InvalidBoardKind { value, .. } => ApiError::Validation {
                message: format!("unknown board kind '{value}', expected personal or team"),
                field: Some("kind".to_string()),
                location,
            },
            other @ CoreError::ActivityMetadata { .. } => ApiError::Internal {
                message: other.to_string(),
                location,
            },
        }
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            DbError::NotFound { entity, id, .. } => ApiError::NotFound {
                message: format!("{entity} {id} not found"),
                location,
            },
            DbError::AccessDenied { message, .. } => ApiError::AccessDenied { message, location },
            DbError::InvalidReference { message, .. } => {
                ApiError::InvalidReference { message, location }
            }
            DbError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            DbError::ConcurrencyConflict { message, .. } => {
                ApiError::ConcurrencyConflict { message, location }
            }
            DbError::Sqlx {
                source: sqlx::Error::RowNotFound,
                ..
            } => ApiError::NotFound {
                message: "Resource not found".to_string(),
                location,
            },
            other @ (DbError::Sqlx { .. }
            | DbError::Migration { .. }
            | DbError::Initialization { .. }) => ApiError::Internal {
                message: other.to_string(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
