#![allow(dead_code)]

//! Test infrastructure for kb-server API tests

use kb_config::Config;
use kb_core::{Board, Card, Column, Role};
use kb_db::{NewBoard, NewCard, NewColumn};
use kb_server::{AppState, CALLER_ID_HEADER, build_router};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusBuilder;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use uuid::Uuid;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    kb_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing. The Prometheus handle is not installed globally.
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let prometheus = PrometheusBuilder::new().build_recorder().handle();
    AppState::new(pool, &Config::default(), prometheus)
}

/// Send one request through a fresh router and decode the JSON body (Null when empty).
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    caller: Option<Uuid>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(caller) = caller {
        builder = builder.header(CALLER_ID_HEADER, caller.to_string());
    }
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

pub async fn create_board(state: &AppState, owner_id: Uuid) -> Board {
    let input = NewBoard {
        name: "Test Board".to_string(),
        ..Default::default()
    };
    state
        .store
        .create_board(&input, owner_id)
        .await
        .expect("Failed to create board")
        .board
}

pub async fn create_column(state: &AppState, board_id: Uuid, name: &str) -> Column {
    let input = NewColumn {
        name: name.to_string(),
        ..Default::default()
    };
    state
        .store
        .create_column(board_id, &input)
        .await
        .expect("Failed to create column")
        .column
}

pub async fn create_card(state: &AppState, column_id: Uuid, title: &str, user_id: Uuid) -> Card {
    let input = NewCard {
        title: title.to_string(),
        ..Default::default()
    };
    state
        .store
        .create_card(column_id, &input, user_id)
        .await
        .expect("Failed to create card")
        .card
}

pub async fn add_member(state: &AppState, board_id: Uuid, user_id: Uuid, role: Role) {
    state
        .store
        .add_member(board_id, user_id, role)
        .await
        .expect("Failed to add member");
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}

pub async fn activity_kinds(pool: &SqlitePool, board_id: Uuid) -> Vec<String> {
    sqlx::query_scalar("SELECT kind FROM activities WHERE board_id = ? ORDER BY created_at, rowid")
        .bind(board_id.to_string())
        .fetch_all(pool)
        .await
        .expect("Failed to read activities")
}

/// Titles of a JSON card array in the order returned
pub fn titles(cards: &serde_json::Value) -> Vec<String> {
    cards
        .as_array()
        .map(|cards| {
            cards
                .iter()
                .map(|card| card["title"].as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default()
}

pub fn names(columns: &serde_json::Value) -> Vec<String> {
    columns
        .as_array()
        .map(|columns| {
            columns
                .iter()
                .map(|column| column["name"].as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default()
}
