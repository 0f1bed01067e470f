//! Board member REST API handlers

use crate::api::activity::record;
use crate::api::ids::parse_id;
use crate::{
    AddMemberRequest, ApiResult, AppState, CallerId, ChangeRoleRequest, DeleteResponse,
    MemberDto, MemberListResponse, MemberResponse,
};

use kb_core::{Activity, ActivityKind, Permission, Role};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use uuid::Uuid;

/// GET /api/v1/boards/{board_id}/members
pub async fn list_members(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(board_id): Path<String>,
) -> ApiResult<Json<MemberListResponse>> {
    let board_id = Uuid::parse_str(&board_id)?;

    state
        .access
        .authorize(board_id, caller_id, Permission::View)
        .await?;
    let members = state.store.list_members(board_id).await?;

    Ok(Json(MemberListResponse {
        members: members.into_iter().map(MemberDto::from).collect(),
    }))
}

/// POST /api/v1/boards/{board_id}/members
pub async fn add_member(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path(board_id): Path<String>,
    payload: Result<Json<AddMemberRequest>, JsonRejection>,
) -> ApiResult<Json<MemberResponse>> {
    let board_id = Uuid::parse_str(&board_id)?;

    // 1. Owner only
    state
        .access
        .authorize(board_id, caller_id, Permission::ManageMembers)
        .await?;

    // 2. Validate
    let Json(req) = payload?;
    let user_id = parse_id(&req.user_id, "user_id")?;
    let role = req.role.parse::<Role>()?;

    // 3. Grant
    let member = state.store.add_member(board_id, user_id, role).await?;

    // 4. Record activity
    record(
        &state,
        Activity::on_board(
            board_id,
            caller_id,
            ActivityKind::MemberAdded { user_id, role },
        ),
    )
    .await;
    state.metrics.mutation("member_added");

    Ok(Json(MemberResponse {
        member: member.into(),
    }))
}

/// PUT /api/v1/boards/{board_id}/members/{user_id}
pub async fn change_member_role(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path((board_id, user_id)): Path<(String, String)>,
    payload: Result<Json<ChangeRoleRequest>, JsonRejection>,
) -> ApiResult<Json<MemberResponse>> {
    let board_id = Uuid::parse_str(&board_id)?;
    let user_id = Uuid::parse_str(&user_id)?;

    // 1. Owner only
    state
        .access
        .authorize(board_id, caller_id, Permission::ManageMembers)
        .await?;

    // 2. Validate
    let Json(req) = payload?;
    let role = req.role.parse::<Role>()?;

    // 3. Change
    let (member, previous) = state
        .store
        .change_member_role(board_id, user_id, role)
        .await?;

    // 4. Record activity
    if previous != role {
        record(
            &state,
            Activity::on_board(
                board_id,
                caller_id,
                ActivityKind::MemberRoleChanged {
                    user_id,
                    from: previous,
                    to: role,
                },
            ),
        )
        .await;
        state.metrics.mutation("member_role_changed");
    }

    log::info!(
        "Changed role of {} on board {} from {} to {}",
        user_id,
        board_id,
        previous,
        role
    );

    Ok(Json(MemberResponse {
        member: member.into(),
    }))
}

/// DELETE /api/v1/boards/{board_id}/members/{user_id}
pub async fn remove_member(
    State(state): State<AppState>,
    CallerId(caller_id): CallerId,
    Path((board_id, user_id)): Path<(String, String)>,
) -> ApiResult<Json<DeleteResponse>> {
    let board_id = Uuid::parse_str(&board_id)?;
    let user_id = Uuid::parse_str(&user_id)?;

    state
        .access
        .authorize(board_id, caller_id, Permission::ManageMembers)
        .await?;

    state.store.remove_member(board_id, user_id).await?;

    record(
        &state,
        Activity::on_board(board_id, caller_id, ActivityKind::MemberRemoved { user_id }),
    )
    .await;
    state.metrics.mutation("member_removed");

    Ok(Json(DeleteResponse {
        deleted_id: user_id.to_string(),
    }))
}
