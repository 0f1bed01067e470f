use crate::ApiError;

use kb_core::CoreError;
use kb_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Card 42 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Card 42 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("title is required", "title");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let error = ApiError::Internal {
        message: "disk I/O error at /var/lib/kanban".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Internal server error");
}

#[test]
fn test_status_and_code_table() {
    let cases = [
        (
            ApiError::Unauthenticated {
                message: String::new(),
                location: ErrorLocation::from(Location::caller()),
            },
            StatusCode::UNAUTHORIZED,
            "UNAUTHENTICATED",
        ),
        (
            ApiError::access_denied("no"),
            StatusCode::FORBIDDEN,
            "ACCESS_DENIED",
        ),
        (
            ApiError::InvalidReference {
                message: String::new(),
                location: ErrorLocation::from(Location::caller()),
            },
            StatusCode::UNPROCESSABLE_ENTITY,
            "INVALID_REFERENCE",
        ),
        (
            ApiError::ConcurrencyConflict {
                message: String::new(),
                location: ErrorLocation::from(Location::caller()),
            },
            StatusCode::CONFLICT,
            "CONCURRENCY_CONFLICT",
        ),
    ];

    for (error, status, code) in cases {
        assert_that!(error.status(), eq(status));
        assert_that!(error.code(), eq(code));
    }
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let error: ApiError = Uuid::parse_str("not-a-uuid").unwrap_err().into();

    assert_that!(error.code(), eq("VALIDATION_ERROR"));
}

#[test]
fn test_db_not_found_names_entity() {
    let id = Uuid::new_v4();
    let error: ApiError = DbError::not_found("Column", id).into();

    match error {
        ApiError::NotFound { message, .. } => {
            assert_that!(message, eq(&format!("Column {id} not found")));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_db_conflict_and_access_denied_map_through() {
    let conflict: ApiError = DbError::conflict("lock timed out").into();
    let denied: ApiError = DbError::access_denied("no access to this board").into();

    assert_that!(conflict.status(), eq(StatusCode::CONFLICT));
    assert_that!(denied.status(), eq(StatusCode::FORBIDDEN));
}

#[test]
fn test_position_out_of_range_names_position_field() {
    let core = CoreError::PositionOutOfRange {
        position: 7,
        max: 3,
        location: ErrorLocation::from(Location::caller()),
    };

    let error: ApiError = core.into();

    match error {
        ApiError::Validation { field, .. } => assert_that!(field, some(eq("position"))),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_unknown_role_names_role_field() {
    let core = "admin".parse::<kb_core::Role>().unwrap_err();

    let error: ApiError = core.into();

    match error {
        ApiError::Validation { message, field, .. } => {
            assert_that!(field, some(eq("role")));
            assert_that!(message, contains_substring("admin"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_sqlx_failure_is_internal() {
    let error: ApiError = DbError::from(sqlx::Error::PoolTimedOut).into();

    assert_that!(error.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
}
