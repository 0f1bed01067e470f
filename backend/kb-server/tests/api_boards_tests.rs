//! Integration tests for board API handlers

mod common;

use crate::common::{
    activity_kinds, add_member, count_rows, create_board, create_test_app_state, names, send,
};

use kb_core::Role;

use axum::http::StatusCode;
use googletest::prelude::*;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_create_board_with_template() {
    let state = create_test_app_state().await;
    let owner = Uuid::new_v4();

    let (status, json) = send(
        &state,
        "POST",
        "/api/v1/boards",
        Some(owner),
        Some(json!({
            "name": "Launch",
            "template": [
                { "name": "Todo", "cards": [{ "title": "Plan" }, { "title": "Build" }] },
                { "name": "Doing" },
                { "name": "Done", "wip_limit": 5 }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["role"], "owner");
    assert_eq!(json["board"]["name"], "Launch");
    assert_eq!(json["board"]["owner_id"], owner.to_string());
    assert_eq!(names(&json["columns"]), vec!["Todo", "Doing", "Done"]);
    assert_eq!(json["columns"][0]["cards"][1]["title"], "Build");
    assert_eq!(json["columns"][0]["cards"][1]["position"], 1);
    assert_eq!(json["columns"][2]["wip_limit"], 5);

    let board_id = Uuid::parse_str(json["board"]["id"].as_str().unwrap()).unwrap();
    assert_eq!(
        activity_kinds(&state.pool, board_id).await,
        vec!["board_created".to_string()]
    );
}

#[tokio::test]
async fn test_create_board_requires_caller() {
    let state = create_test_app_state().await;

    let (status, json) = send(
        &state,
        "POST",
        "/api/v1/boards",
        None,
        Some(json!({ "name": "Launch" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");
    assert_eq!(count_rows(&state.pool, "boards").await, 0);
}

#[tokio::test]
async fn test_create_board_blank_name_is_validation_error() {
    let state = create_test_app_state().await;

    let (status, json) = send(
        &state,
        "POST",
        "/api/v1/boards",
        Some(Uuid::new_v4()),
        Some(json!({ "name": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_create_board_malformed_json_is_validation_error() {
    let state = create_test_app_state().await;

    let (status, json) = send(
        &state,
        "POST",
        "/api/v1/boards",
        Some(Uuid::new_v4()),
        Some(json!({ "description": "no name" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_board_reports_callers_role() {
    let state = create_test_app_state().await;
    let owner = Uuid::new_v4();
    let viewer = Uuid::new_v4();
    let board = create_board(&state, owner).await;
    add_member(&state, board.id, viewer, Role::Viewer).await;

    let (status, json) = send(
        &state,
        "GET",
        &format!("/api/v1/boards/{}", board.id),
        Some(viewer),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["role"], "viewer");
    assert_eq!(json["board"]["id"], board.id.to_string());
}

#[tokio::test]
async fn test_get_board_stranger_is_denied() {
    let state = create_test_app_state().await;
    let board = create_board(&state, Uuid::new_v4()).await;

    let (status, json) = send(
        &state,
        "GET",
        &format!("/api/v1/boards/{}", board.id),
        Some(Uuid::new_v4()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "ACCESS_DENIED");
}

#[tokio::test]
async fn test_get_board_malformed_id_is_validation_error() {
    let state = create_test_app_state().await;

    let (status, _json) = send(
        &state,
        "GET",
        "/api/v1/boards/not-a-uuid",
        Some(Uuid::new_v4()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_board_missing_is_not_found() {
    let state = create_test_app_state().await;

    let (status, json) = send(
        &state,
        "GET",
        &format!("/api/v1/boards/{}", Uuid::new_v4()),
        Some(Uuid::new_v4()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_list_boards_filters_by_visibility_and_archive() {
    let state = create_test_app_state().await;
    let owner = Uuid::new_v4();
    let active = create_board(&state, owner).await;
    let archived = create_board(&state, owner).await;
    create_board(&state, Uuid::new_v4()).await;

    let (status, _json) = send(
        &state,
        "PUT",
        &format!("/api/v1/boards/{}/archive", archived.id),
        Some(owner),
        Some(json!({ "archived": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_status, live) = send(&state, "GET", "/api/v1/boards", Some(owner), None).await;
    let (_status, shelved) = send(
        &state,
        "GET",
        "/api/v1/boards?archived=true",
        Some(owner),
        None,
    )
    .await;

    assert_eq!(live["boards"].as_array().map(Vec::len), Some(1));
    assert_eq!(live["boards"][0]["id"], active.id.to_string());
    assert_eq!(shelved["boards"].as_array().map(Vec::len), Some(1));
    assert_eq!(shelved["boards"][0]["id"], archived.id.to_string());
}

#[tokio::test]
async fn test_list_boards_unknown_kind_is_validation_error() {
    let state = create_test_app_state().await;

    let (status, json) = send(
        &state,
        "GET",
        "/api/v1/boards?kind=shared",
        Some(Uuid::new_v4()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "kind");
}

#[tokio::test]
async fn test_update_board_by_editor_keeps_omitted_fields() {
    let state = create_test_app_state().await;
    let owner = Uuid::new_v4();
    let editor = Uuid::new_v4();
    let board = create_board(&state, owner).await;
    add_member(&state, board.id, editor, Role::Editor).await;

    let (status, json) = send(
        &state,
        "PUT",
        &format!("/api/v1/boards/{}", board.id),
        Some(editor),
        Some(json!({ "name": "Renamed", "background_color": "#ABCDEF" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["board"]["name"], "Renamed");
    assert_eq!(json["board"]["background_color"], "#abcdef");
    assert_eq!(json["board"]["owner_id"], owner.to_string());
}

#[tokio::test]
async fn test_editor_cannot_archive_or_delete_board() {
    let state = create_test_app_state().await;
    let owner = Uuid::new_v4();
    let editor = Uuid::new_v4();
    let board = create_board(&state, owner).await;
    add_member(&state, board.id, editor, Role::Editor).await;

    let (archive_status, _json) = send(
        &state,
        "PUT",
        &format!("/api/v1/boards/{}/archive", board.id),
        Some(editor),
        Some(json!({ "archived": true })),
    )
    .await;
    let (delete_status, _json) = send(
        &state,
        "DELETE",
        &format!("/api/v1/boards/{}", board.id),
        Some(editor),
        None,
    )
    .await;

    assert_eq!(archive_status, StatusCode::FORBIDDEN);
    assert_eq!(delete_status, StatusCode::FORBIDDEN);
    assert_eq!(count_rows(&state.pool, "boards").await, 1);
}

#[tokio::test]
async fn test_owner_deletes_board() {
    let state = create_test_app_state().await;
    let owner = Uuid::new_v4();
    let board = create_board(&state, owner).await;

    let (status, json) = send(
        &state,
        "DELETE",
        &format!("/api/v1/boards/{}", board.id),
        Some(owner),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["deleted_id"], board.id.to_string());

    let (status, _json) = send(
        &state,
        "GET",
        &format!("/api/v1/boards/{}", board.id),
        Some(owner),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_endpoints() {
    let state = create_test_app_state().await;

    let (health_status, health) = send(&state, "GET", "/health", None, None).await;
    let (ready_status, _body) = send(&state, "GET", "/ready", None, None).await;
    let (live_status, _body) = send(&state, "GET", "/live", None, None).await;

    assert_that!(health_status, eq(StatusCode::OK));
    assert_that!(ready_status, eq(StatusCode::OK));
    assert_that!(live_status, eq(StatusCode::OK));
    assert_eq!(health["components"]["database"], "operational");
}

#[tokio::test]
async fn test_archive_board_twice_records_one_activity() {
    let state = create_test_app_state().await;
    let owner = Uuid::new_v4();
    let board = create_board(&state, owner).await;

    for _ in 0..2 {
        let (status, json) = send(
            &state,
            "PUT",
            &format!("/api/v1/boards/{}/archive", board.id),
            Some(owner),
            Some(json!({ "archived": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["board"]["archived"], true);
    }

    assert_eq!(
        activity_kinds(&state.pool, board.id).await,
        vec!["board_archived"]
    );
}

#[tokio::test]
async fn test_update_board_with_current_name_records_nothing() {
    let state = create_test_app_state().await;
    let owner = Uuid::new_v4();
    let board = create_board(&state, owner).await;

    let (status, json) = send(
        &state,
        "PUT",
        &format!("/api/v1/boards/{}", board.id),
        Some(owner),
        Some(json!({ "name": "Test Board" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["board"]["name"], "Test Board");
    assert_that!(activity_kinds(&state.pool, board.id).await, is_empty());
}
