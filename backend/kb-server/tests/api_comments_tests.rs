//! Integration tests for comment API handlers

mod common;

use crate::common::{
    add_member, count_rows, create_board, create_card, create_column, create_test_app_state, send,
};

use kb_core::Role;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

struct Fixture {
    state: kb_server::AppState,
    owner: Uuid,
    author: Uuid,
    other_editor: Uuid,
    card_id: Uuid,
}

async fn fixture() -> Fixture {
    let state = create_test_app_state().await;
    let owner = Uuid::new_v4();
    let author = Uuid::new_v4();
    let other_editor = Uuid::new_v4();
    let board = create_board(&state, owner).await;
    add_member(&state, board.id, author, Role::Editor).await;
    add_member(&state, board.id, other_editor, Role::Editor).await;
    let column = create_column(&state, board.id, "Todo").await;
    let card = create_card(&state, column.id, "Discuss", owner).await;

    Fixture {
        state,
        owner,
        author,
        other_editor,
        card_id: card.id,
    }
}

async fn post_comment(f: &Fixture, content: &str) -> String {
    let (status, json) = send(
        &f.state,
        "POST",
        &format!("/api/v1/cards/{}/comments", f.card_id),
        Some(f.author),
        Some(json!({ "content": content })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json["comment"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_add_and_list_comments() {
    let f = fixture().await;
    post_comment(&f, "first").await;
    post_comment(&f, "second").await;

    let (status, json) = send(
        &f.state,
        "GET",
        &format!("/api/v1/cards/{}/comments", f.card_id),
        Some(f.owner),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["comments"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["comments"][0]["author_id"], f.author.to_string());
}

#[tokio::test]
async fn test_blank_comment_is_validation_error() {
    let f = fixture().await;

    let (status, json) = send(
        &f.state,
        "POST",
        &format!("/api/v1/cards/{}/comments", f.card_id),
        Some(f.author),
        Some(json!({ "content": "  " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "content");
}

#[tokio::test]
async fn test_other_editor_cannot_delete_comment() {
    let f = fixture().await;
    let comment_id = post_comment(&f, "mine").await;

    let (status, json) = send(
        &f.state,
        "DELETE",
        &format!("/api/v1/comments/{comment_id}"),
        Some(f.other_editor),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "ACCESS_DENIED");
    assert_eq!(count_rows(&f.state.pool, "comments").await, 1);
}

#[tokio::test]
async fn test_author_deletes_own_comment() {
    let f = fixture().await;
    let comment_id = post_comment(&f, "oops").await;

    let (status, json) = send(
        &f.state,
        "DELETE",
        &format!("/api/v1/comments/{comment_id}"),
        Some(f.author),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["deleted_id"], comment_id);
    assert_eq!(count_rows(&f.state.pool, "comments").await, 0);
}

#[tokio::test]
async fn test_owner_deletes_any_comment() {
    let f = fixture().await;
    let comment_id = post_comment(&f, "spam").await;

    let (status, _json) = send(
        &f.state,
        "DELETE",
        &format!("/api/v1/comments/{comment_id}"),
        Some(f.owner),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(count_rows(&f.state.pool, "comments").await, 0);
}
