//! Board role resolution.
//!
//! This is the only place a caller's role on a board is derived. Handlers ask
//! for a [`Permission`] and get back the board together with the role that
//! granted it, or an error before anything is written.

use crate::repositories::board_member_repository::BoardMemberRepository;
use crate::repositories::board_repository::BoardRepository;
use crate::{DbError, Result as DbErrorResult, TeamDirectory};

use kb_core::{Board, BoardKind, Permission, Role};

use std::sync::Arc;

use log::debug;
use sqlx::SqlitePool;
use uuid::Uuid;

/// A board the caller was allowed to act on, with the role that allowed it.
#[derive(Debug, Clone)]
pub struct Authorized {
    pub board: Board,
    pub role: Role,
}

#[derive(Clone)]
pub struct AccessControl {
    pool: SqlitePool,
    teams: Arc<dyn TeamDirectory>,
}

impl AccessControl {
    pub fn new(pool: SqlitePool, teams: Arc<dyn TeamDirectory>) -> Self {
        Self { pool, teams }
    }

    /// First match wins: owner, explicit member row, team membership, no access.
    pub async fn resolve_role(&self, board: &Board, caller_id: Uuid) -> DbErrorResult<Option<Role>> {
        if board.is_owned_by(caller_id) {
            return Ok(Some(Role::Owner));
        }

        if let Some(member) = BoardMemberRepository::find(&self.pool, board.id, caller_id).await? {
            return Ok(Some(member.role));
        }

        if board.kind == BoardKind::Team
            && let Some(team_id) = board.team_id
            && self.teams.is_member(team_id, caller_id).await?
        {
            return Ok(Some(Role::Editor));
        }

        Ok(None)
    }

    /// Load the board and require `permission` for the caller.
    pub async fn authorize(
        &self,
        board_id: Uuid,
        caller_id: Uuid,
        permission: Permission,
    ) -> DbErrorResult<Authorized> {
        let board = BoardRepository::find_by_id(&self.pool, board_id)
            .await?
            .ok_or_else(|| DbError::not_found("Board", board_id))?;

        let role = self.resolve_role(&board, caller_id).await?;
        match role {
            Some(role) if role.allows(permission) => Ok(Authorized { board, role }),
            Some(role) => {
                debug!("{caller_id} as {role} lacks {permission:?} on board {board_id}");
                Err(DbError::access_denied(format!(
                    "role {role} does not allow {permission:?} on this board"
                )))
            }
            None => {
                debug!("{caller_id} has no access to board {board_id}");
                Err(DbError::access_denied("no access to this board"))
            }
        }
    }

    /// Teams whose boards the caller can see implicitly.
    pub async fn teams_of(&self, caller_id: Uuid) -> DbErrorResult<Vec<Uuid>> {
        self.teams.teams_of(caller_id).await
    }
}
