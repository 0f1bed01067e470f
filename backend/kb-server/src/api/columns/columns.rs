//! Column REST API handlers

use crate::api::activity::record;
use crate::api::ids::parse_ids;
use crate::{
    ApiResult, AppState, CallerId, ColumnDeleteResponse, ColumnDto, ColumnListResponse,
    ColumnsResponse, CreateColumnRequest, ReorderColumnsRequest, UpdateColumnRequest,
};

use kb_core::{Activity, ActivityKind, Permission};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use uuid::Uuid;

/// POST /api/v1/boards/{board_id}/columns
pub async fn create_column(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(board_id): Path<String>,
    payload: Result<Json<CreateColumnRequest>, JsonRejection>,
) -> ApiResult<Json<ColumnsResponse>> {
    let board_id = Uuid::parse_str(&board_id)?;

    // 1. Check permission
    state
        .access
        .authorize(board_id, caller_id, Permission::Edit)
        .await?;

    // 2. Validate
    let Json(req) = payload?;
    let input = req.into_input(&state.validation)?;

    // 3. Insert at the requested index
    let change = state.store.create_column(board_id, &input).await?;

    // 4. Record activity
    record(
        &state,
        Activity::on_board(
            board_id,
            caller_id,
            ActivityKind::ColumnCreated {
                column_id: change.column.id,
                name: change.column.name.clone(),
                position: change.column.position,
            },
        ),
    )
    .await;
    state.metrics.mutation("column_created");

    log::info!(
        "Created column {} on board {} via REST API",
        change.column.id,
        board_id
    );

    Ok(Json(ColumnsResponse {
        column: change.column.into(),
        columns: change.columns.into_iter().map(ColumnDto::from).collect(),
    }))
}

/// PUT /api/v1/columns/{column_id}
pub async fn update_column(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(column_id): Path<String>,
    payload: Result<Json<UpdateColumnRequest>, JsonRejection>,
) -> ApiResult<Json<ColumnsResponse>> {
    let column_id = Uuid::parse_str(&column_id)?;

    // 1. Resolve the board and check permission
    let column = state.store.find_column(column_id).await?;
    state
        .access
        .authorize(column.board_id, caller_id, Permission::Edit)
        .await?;

    // 2. Validate
    let Json(req) = payload?;
    let changes = req.into_changes(&state.validation)?;

    // 3. Update and move
    let change = state.store.update_column(column_id, &changes).await?;

    // 4. Record activity: metadata and position are reported separately
    if !change.fields.is_empty() {
        record(
            &state,
            Activity::on_board(
                column.board_id,
                caller_id,
                ActivityKind::ColumnUpdated {
                    column_id,
                    fields: change.fields.clone(),
                },
            ),
        )
        .await;
    }
    if let Some(from) = change.moved_from {
        record(
            &state,
            Activity::on_board(
                column.board_id,
                caller_id,
                ActivityKind::ColumnMoved {
                    column_id,
                    from,
                    to: change.column.position,
                },
            ),
        )
        .await;
    }
    if !change.fields.is_empty() || change.moved_from.is_some() {
        state.metrics.mutation("column_updated");

        log::info!("Updated column {} via REST API", column_id);
    }

    Ok(Json(ColumnsResponse {
        column: change.column.into(),
        columns: change.columns.into_iter().map(ColumnDto::from).collect(),
    }))
}

/// DELETE /api/v1/columns/{column_id}
///
/// Removes the column with all of its cards, live and archived.
pub async fn delete_column(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(column_id): Path<String>,
) -> ApiResult<Json<ColumnDeleteResponse>> {
    let column_id = Uuid::parse_str(&column_id)?;

    let column = state.store.find_column(column_id).await?;
    state
        .access
        .authorize(column.board_id, caller_id, Permission::Edit)
        .await?;

    let deletion = state.store.delete_column(column_id).await?;

    record(
        &state,
        Activity::on_board(
            column.board_id,
            caller_id,
            ActivityKind::ColumnDeleted {
                column_id,
                name: deletion.column.name.clone(),
                cards_removed: deletion.cards_removed,
            },
        ),
    )
    .await;
    state.metrics.mutation("column_deleted");

    log::info!(
        "Deleted column {} with {} cards via REST API",
        column_id,
        deletion.cards_removed
    );

    Ok(Json(ColumnDeleteResponse {
        deleted_id: column_id.to_string(),
        cards_removed: deletion.cards_removed,
        columns: deletion.columns.into_iter().map(ColumnDto::from).collect(),
    }))
}

/// PUT /api/v1/boards/{board_id}/columns/reorder
pub async fn reorder_columns(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(board_id): Path<String>,
    payload: Result<Json<ReorderColumnsRequest>, JsonRejection>,
) -> ApiResult<Json<ColumnListResponse>> {
    let board_id = Uuid::parse_str(&board_id)?;

    state
        .access
        .authorize(board_id, caller_id, Permission::Edit)
        .await?;

    let Json(req) = payload?;
    let column_ids = parse_ids(&req.column_ids, "column_ids")?;

    let columns = state.store.reorder_columns(board_id, &column_ids).await?;

    record(
        &state,
        Activity::on_board(
            board_id,
            caller_id,
            ActivityKind::ColumnsReordered { column_ids },
        ),
    )
    .await;
    state.metrics.mutation("columns_reordered");

    Ok(Json(ColumnListResponse {
        columns: columns.into_iter().map(ColumnDto::from).collect(),
    }))
}
