use crate::{AppState, health};
use crate::{
    add_comment, add_member, archive_board, archive_card, change_member_role, create_board,
    create_card, create_column, delete_board, delete_card, delete_column, delete_comment,
    get_board, get_card, list_boards, list_comments, list_members, move_card, remove_member,
    reorder_cards, reorder_columns, update_board, update_card, update_column,
};

use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, post, put},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origins);

    let api = Router::new()
        // Boards
        .route("/boards", get(list_boards).post(create_board))
        .route(
            "/boards/{board_id}",
            get(get_board).put(update_board).delete(delete_board),
        )
        .route("/boards/{board_id}/archive", put(archive_board))
        // Members
        .route(
            "/boards/{board_id}/members",
            get(list_members).post(add_member),
        )
        .route(
            "/boards/{board_id}/members/{user_id}",
            put(change_member_role).delete(remove_member),
        )
        // Columns
        .route("/boards/{board_id}/columns", post(create_column))
        .route("/boards/{board_id}/columns/reorder", put(reorder_columns))
        .route(
            "/columns/{column_id}",
            put(update_column).delete(delete_column),
        )
        // Cards
        .route("/columns/{column_id}/cards", post(create_card))
        .route("/columns/{column_id}/cards/reorder", put(reorder_cards))
        .route(
            "/cards/{card_id}",
            get(get_card).put(update_card).delete(delete_card),
        )
        .route("/cards/{card_id}/archive", put(archive_card))
        .route("/cards/{card_id}/move", put(move_card))
        // Comments
        .route(
            "/cards/{card_id}/comments",
            get(list_comments).post(add_comment),
        )
        .route("/comments/{comment_id}", delete(delete_comment));

    Router::new()
        .nest("/api/v1", api)
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/metrics", get(health::metrics))
        // Add shared state
        .with_state(state)
        .layer(cors)
}

/// Any origin when none are configured, otherwise exactly the configured list
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    log::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
