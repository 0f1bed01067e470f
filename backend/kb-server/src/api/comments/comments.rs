//! Comment REST API handlers

use crate::api::activity::record;
use crate::{
    ApiError, ApiResult, AppState, CallerId, CommentDto, CommentListResponse, CommentResponse,
    CreateCommentRequest, DeleteResponse,
};

use kb_core::validation::required_text;
use kb_core::{Activity, ActivityKind, Permission};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use uuid::Uuid;

/// GET /api/v1/cards/{card_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(card_id): Path<String>,
) -> ApiResult<Json<CommentListResponse>> {
    let card_id = Uuid::parse_str(&card_id)?;

    let card = state.store.find_card(card_id).await?;
    state
        .access
        .authorize(card.board_id, caller_id, Permission::View)
        .await?;

    let comments = state.store.list_comments(card_id).await?;

    Ok(Json(CommentListResponse {
        comments: comments.into_iter().map(CommentDto::from).collect(),
    }))
}

/// POST /api/v1/cards/{card_id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(card_id): Path<String>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> ApiResult<Json<CommentResponse>> {
    let card_id = Uuid::parse_str(&card_id)?;

    // 1. Check permission
    let card = state.store.find_card(card_id).await?;
    state
        .access
        .authorize(card.board_id, caller_id, Permission::Edit)
        .await?;

    // 2. Validate
    let Json(req) = payload?;
    let content = required_text(&req.content, "content", state.validation.max_comment_length)?;

    // 3. Add
    let comment = state.store.add_comment(card_id, caller_id, &content).await?;

    // 4. Record activity
    record(
        &state,
        Activity::on_card(
            card.board_id,
            card_id,
            caller_id,
            ActivityKind::CommentAdded {
                comment_id: comment.id,
            },
        ),
    )
    .await;
    state.metrics.mutation("comment_added");

    log::info!("Added comment {} to card {} via REST API", comment.id, card_id);

    Ok(Json(CommentResponse {
        comment: comment.into(),
    }))
}

/// DELETE /api/v1/comments/{comment_id}
///
/// Board owners may delete any comment; everyone else only their own.
pub async fn delete_comment(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(comment_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let comment_id = Uuid::parse_str(&comment_id)?;

    // 1. Resolve comment -> card -> board
    let comment = state.store.find_comment(comment_id).await?;
    let card = state.store.find_card(comment.card_id).await?;

    // 2. Any access to the board, then owner or author
    let authorized = state
        .access
        .authorize(card.board_id, caller_id, Permission::View)
        .await?;
    if !authorized
        .role
        .can_delete_authored(comment.author_id, caller_id)
    {
        return Err(ApiError::access_denied(
            "only the author or the board owner can delete this comment",
        ));
    }

    // 3. Delete
    state.store.delete_comment(comment_id).await?;

    // 4. Record activity
    record(
        &state,
        Activity::on_card(
            card.board_id,
            card.id,
            caller_id,
            ActivityKind::CommentDeleted { comment_id },
        ),
    )
    .await;
    state.metrics.mutation("comment_deleted");

    log::info!("Deleted comment {} by {} via REST API", comment_id, caller_id);

    Ok(Json(DeleteResponse {
        deleted_id: comment_id.to_string(),
    }))
}
