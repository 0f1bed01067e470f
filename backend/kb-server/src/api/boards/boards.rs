//! Board REST API handlers

use crate::api::activity::record;
use crate::{
    ApiResult, AppState, ArchiveRequest, BoardDetailResponse, BoardDto,
    BoardListResponse, BoardResponse, CallerId, ColumnWithCardsDto, CreateBoardRequest,
    DeleteResponse, ListBoardsQuery, UpdateBoardRequest,
};

use kb_core::{Activity, ActivityKind, BoardKind, Permission, Role};
use kb_db::BoardFilter;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use uuid::Uuid;

/// GET /api/v1/boards
pub async fn list_boards(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    query: Result<Query<ListBoardsQuery>, QueryRejection>,
) -> ApiResult<Json<BoardListResponse>> {
    let Query(query) = query?;

    let kind = match query.kind.as_deref() {
        None | Some("all") => None,
        Some(kind) => Some(kind.parse::<BoardKind>()?),
    };
    let filter = BoardFilter {
        kind,
        archived: query.archived,
    };

    let team_ids = state.access.teams_of(caller_id).await?;
    let boards = state.store.list_boards(caller_id, &team_ids, filter).await?;

    Ok(Json(BoardListResponse {
        boards: boards.into_iter().map(BoardDto::from).collect(),
    }))
}

/// POST /api/v1/boards
pub async fn create_board(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    payload: Result<Json<CreateBoardRequest>, JsonRejection>,
) -> ApiResult<Json<BoardDetailResponse>> {
    // 1. Validate
    let Json(req) = payload?;
    let input = req.into_input(&state.validation)?;

    // 2. Create board with its template
    let detail = state.store.create_board(&input, caller_id).await?;

    // 3. Record activity
    record(
        &state,
        Activity::on_board(
            detail.board.id,
            caller_id,
            ActivityKind::BoardCreated {
                name: detail.board.name.clone(),
                from_template: !input.template.is_empty(),
            },
        ),
    )
    .await;
    state.metrics.mutation("board_created");

    log::info!("Created board {} via REST API", detail.board.id);

    Ok(Json(BoardDetailResponse {
        board: detail.board.into(),
        role: Role::Owner.to_string(),
        columns: detail
            .columns
            .into_iter()
            .map(ColumnWithCardsDto::from)
            .collect(),
    }))
}

/// GET /api/v1/boards/{board_id}
pub async fn get_board(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(board_id): Path<String>,
) -> ApiResult<Json<BoardDetailResponse>> {
    let board_id = Uuid::parse_str(&board_id)?;

    let authorized = state
        .access
        .authorize(board_id, caller_id, Permission::View)
        .await?;
    let detail = state.store.board_detail(board_id).await?;

    Ok(Json(BoardDetailResponse {
        board: detail.board.into(),
        role: authorized.role.to_string(),
        columns: detail
            .columns
            .into_iter()
            .map(ColumnWithCardsDto::from)
            .collect(),
    }))
}

/// PUT /api/v1/boards/{board_id}
pub async fn update_board(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(board_id): Path<String>,
    payload: Result<Json<UpdateBoardRequest>, JsonRejection>,
) -> ApiResult<Json<BoardResponse>> {
    let board_id = Uuid::parse_str(&board_id)?;

    // 1. Name, description and color: owner or editor
    state
        .access
        .authorize(board_id, caller_id, Permission::ModifySettings)
        .await?;

    // 2. Validate
    let Json(req) = payload?;
    let changes = req.into_changes(&state.validation)?;

    // 3. Update
    let update = state.store.update_board(board_id, &changes).await?;

    // 4. Record activity when a value actually changed
    if !update.fields.is_empty() {
        record(
            &state,
            Activity::on_board(
                board_id,
                caller_id,
                ActivityKind::BoardUpdated {
                    fields: update.fields,
                },
            ),
        )
        .await;
        state.metrics.mutation("board_updated");

        log::info!("Updated board {} via REST API", board_id);
    }

    Ok(Json(BoardResponse {
        board: update.board.into(),
    }))
}

/// PUT /api/v1/boards/{board_id}/archive
pub async fn archive_board(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(board_id): Path<String>,
    payload: Result<Json<ArchiveRequest>, JsonRejection>,
) -> ApiResult<Json<BoardResponse>> {
    let board_id = Uuid::parse_str(&board_id)?;

    // 1. Owner only
    state
        .access
        .authorize(board_id, caller_id, Permission::ArchiveBoard)
        .await?;

    // 2. Toggle
    let Json(req) = payload?;
    let archival = state.store.set_board_archived(board_id, req.archived).await?;

    // 3. Record activity unless the flag was already set
    if archival.changed {
        record(
            &state,
            Activity::on_board(
                board_id,
                caller_id,
                ActivityKind::BoardArchived {
                    archived: req.archived,
                },
            ),
        )
        .await;
        state.metrics.mutation("board_archived");

        log::info!(
            "Set board {} archived={} via REST API",
            board_id,
            req.archived
        );
    }

    Ok(Json(BoardResponse {
        board: archival.board.into(),
    }))
}

/// DELETE /api/v1/boards/{board_id}
///
/// No activity is recorded: the board's activity log is deleted with it.
pub async fn delete_board(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(board_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let board_id = Uuid::parse_str(&board_id)?;

    state
        .access
        .authorize(board_id, caller_id, Permission::DeleteBoard)
        .await?;

    state.store.delete_board(board_id).await?;
    state.metrics.mutation("board_deleted");

    log::info!("Deleted board {} by {} via REST API", board_id, caller_id);

    Ok(Json(DeleteResponse {
        deleted_id: board_id.to_string(),
    }))
}
