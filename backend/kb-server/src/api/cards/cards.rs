//! Card REST API handlers
//!
//! Cards carry their board id, so every handler resolves the board from the
//! card (or its column) before checking the caller's role on it.

use crate::api::activity::record;
use crate::api::ids::{parse_id, parse_ids};
use crate::{
    ApiResult, AppState, ArchiveRequest, CallerId, CardDeleteResponse, CardDto,
    CardListResponse, CardMoveResponse, CardResponse, CardsChangeResponse, CreateCardRequest,
    MoveCardRequest, ReorderCardsRequest, UpdateCardRequest,
};

use kb_core::{Activity, ActivityKind, Permission};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use uuid::Uuid;

/// POST /api/v1/columns/{column_id}/cards
pub async fn create_card(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(column_id): Path<String>,
    payload: Result<Json<CreateCardRequest>, JsonRejection>,
) -> ApiResult<Json<CardsChangeResponse>> {
    let column_id = Uuid::parse_str(&column_id)?;

    // 1. Resolve the board and check permission
    let column = state.store.find_column(column_id).await?;
    state
        .access
        .authorize(column.board_id, caller_id, Permission::Edit)
        .await?;

    // 2. Validate
    let Json(req) = payload?;
    let input = req.into_input(&state.validation)?;

    // 3. Insert at the requested index
    let change = state.store.create_card(column_id, &input, caller_id).await?;

    // 4. Record activity
    record(
        &state,
        Activity::on_card(
            column.board_id,
            change.card.id,
            caller_id,
            ActivityKind::CardCreated {
                title: change.card.title.clone(),
                column_id,
                position: change.card.position,
                priority: change.card.priority,
            },
        ),
    )
    .await;
    state.metrics.mutation("card_created");

    log::info!(
        "Created card {} in column {} via REST API",
        change.card.id,
        column_id
    );

    Ok(Json(CardsChangeResponse {
        card: change.card.into(),
        cards: change.cards.into_iter().map(CardDto::from).collect(),
    }))
}

/// GET /api/v1/cards/{card_id}
pub async fn get_card(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(card_id): Path<String>,
) -> ApiResult<Json<CardResponse>> {
    let card_id = Uuid::parse_str(&card_id)?;

    let card = state.store.find_card(card_id).await?;
    state
        .access
        .authorize(card.board_id, caller_id, Permission::View)
        .await?;

    Ok(Json(CardResponse { card: card.into() }))
}

/// PUT /api/v1/cards/{card_id}
pub async fn update_card(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(card_id): Path<String>,
    payload: Result<Json<UpdateCardRequest>, JsonRejection>,
) -> ApiResult<Json<CardResponse>> {
    let card_id = Uuid::parse_str(&card_id)?;

    // 1. Check permission
    let current = state.store.find_card(card_id).await?;
    state
        .access
        .authorize(current.board_id, caller_id, Permission::Edit)
        .await?;

    // 2. Validate
    let Json(req) = payload?;
    let changes = req.into_changes(&state.validation)?;

    // 3. Update
    let update = state.store.update_card(card_id, &changes).await?;

    // 4. Record activity when a value actually changed
    if !update.fields.is_empty() {
        record(
            &state,
            Activity::on_card(
                update.card.board_id,
                card_id,
                caller_id,
                ActivityKind::CardUpdated {
                    fields: update.fields,
                },
            ),
        )
        .await;
        state.metrics.mutation("card_updated");

        log::info!("Updated card {} via REST API", card_id);
    }

    Ok(Json(CardResponse {
        card: update.card.into(),
    }))
}

/// PUT /api/v1/cards/{card_id}/archive
pub async fn archive_card(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(card_id): Path<String>,
    payload: Result<Json<ArchiveRequest>, JsonRejection>,
) -> ApiResult<Json<CardsChangeResponse>> {
    let card_id = Uuid::parse_str(&card_id)?;

    let current = state.store.find_card(card_id).await?;
    state
        .access
        .authorize(current.board_id, caller_id, Permission::Edit)
        .await?;

    let Json(req) = payload?;
    let change = state.store.set_card_archived(card_id, req.archived).await?;

    if current.archived != req.archived {
        record(
            &state,
            Activity::on_card(
                current.board_id,
                card_id,
                caller_id,
                ActivityKind::CardArchived {
                    archived: req.archived,
                },
            ),
        )
        .await;
        state.metrics.mutation("card_archived");
    }

    log::info!(
        "Set card {} archived={} via REST API",
        card_id,
        req.archived
    );

    Ok(Json(CardsChangeResponse {
        card: change.card.into(),
        cards: change.cards.into_iter().map(CardDto::from).collect(),
    }))
}

/// PUT /api/v1/cards/{card_id}/move
pub async fn move_card(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(card_id): Path<String>,
    payload: Result<Json<MoveCardRequest>, JsonRejection>,
) -> ApiResult<Json<CardMoveResponse>> {
    let card_id = Uuid::parse_str(&card_id)?;

    // 1. Check permission on the card's board
    let current = state.store.find_card(card_id).await?;
    state
        .access
        .authorize(current.board_id, caller_id, Permission::Edit)
        .await?;

    // 2. Validate
    let Json(req) = payload?;
    let target_column_id = parse_id(&req.column_id, "column_id")?;

    // 3. Move; the store rejects a target column on another board
    let outcome = state
        .store
        .move_card(card_id, target_column_id, req.position)
        .await?;

    // 4. Record activity
    if outcome.moved {
        record(
            &state,
            Activity::on_card(
                current.board_id,
                card_id,
                caller_id,
                ActivityKind::CardMoved {
                    from_column_id: outcome.from_column_id,
                    from_position: outcome.from_position,
                    to_column_id: outcome.card.column_id,
                    to_position: outcome.card.position,
                },
            ),
        )
        .await;
        state.metrics.mutation("card_moved");

        log::info!(
            "Moved card {} to column {} position {} via REST API",
            card_id,
            outcome.card.column_id,
            outcome.card.position
        );
    }

    Ok(Json(CardMoveResponse {
        card: outcome.card.into(),
        source_cards: outcome.source_cards.into_iter().map(CardDto::from).collect(),
        target_cards: outcome.target_cards.into_iter().map(CardDto::from).collect(),
    }))
}

/// DELETE /api/v1/cards/{card_id}
pub async fn delete_card(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(card_id): Path<String>,
) -> ApiResult<Json<CardDeleteResponse>> {
    let card_id = Uuid::parse_str(&card_id)?;

    let current = state.store.find_card(card_id).await?;
    state
        .access
        .authorize(current.board_id, caller_id, Permission::Edit)
        .await?;

    let change = state.store.delete_card(card_id).await?;

    record(
        &state,
        Activity::on_card(
            current.board_id,
            card_id,
            caller_id,
            ActivityKind::CardDeleted {
                title: change.card.title.clone(),
            },
        ),
    )
    .await;
    state.metrics.mutation("card_deleted");

    log::info!("Deleted card {} by {} via REST API", card_id, caller_id);

    Ok(Json(CardDeleteResponse {
        deleted_id: card_id.to_string(),
        cards: change.cards.into_iter().map(CardDto::from).collect(),
    }))
}

/// PUT /api/v1/columns/{column_id}/cards/reorder
pub async fn reorder_cards(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(column_id): Path<String>,
    payload: Result<Json<ReorderCardsRequest>, JsonRejection>,
) -> ApiResult<Json<CardListResponse>> {
    let column_id = Uuid::parse_str(&column_id)?;

    let column = state.store.find_column(column_id).await?;
    state
        .access
        .authorize(column.board_id, caller_id, Permission::Edit)
        .await?;

    let Json(req) = payload?;
    let card_ids = parse_ids(&req.card_ids, "card_ids")?;

    let cards = state.store.reorder_cards(column_id, &card_ids).await?;

    record(
        &state,
        Activity::on_board(
            column.board_id,
            caller_id,
            ActivityKind::CardsReordered {
                column_id,
                card_ids,
            },
        ),
    )
    .await;
    state.metrics.mutation("cards_reordered");

    Ok(Json(CardListResponse {
        cards: cards.into_iter().map(CardDto::from).collect(),
    }))
}
