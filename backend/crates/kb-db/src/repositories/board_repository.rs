use crate::rows::board_row::BoardRow;
use crate::{DbError, Result as DbErrorResult};

use kb_core::{Board, BoardKind};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

const BOARD_COLUMNS: &str = "id, name, description, kind, team_id, owner_id, archived, \
     background_color, created_at, updated_at";

/// Which boards a listing returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardFilter {
    /// `None` lists both kinds
    pub kind: Option<BoardKind>,
    pub archived: bool,
}

pub struct BoardRepository;

impl BoardRepository {
    pub async fn create<'e, E>(executor: E, board: &Board) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO boards (
                    id, name, description, kind, team_id, owner_id,
                    archived, background_color, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(board.id.to_string())
        .bind(&board.name)
        .bind(&board.description)
        .bind(board.kind.as_str())
        .bind(board.team_id.map(|id| id.to_string()))
        .bind(board.owner_id.to_string())
        .bind(board.archived)
        .bind(&board.background_color)
        .bind(board.created_at.timestamp())
        .bind(board.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Board>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row: Option<BoardRow> =
            sqlx::query_as(&format!("SELECT {BOARD_COLUMNS} FROM boards WHERE id = ?"))
                .bind(id.to_string())
                .fetch_optional(executor)
                .await?;

        row.map(Board::try_from).transpose()
    }

    /// Boards the caller owns, is an explicit member of, or reaches through one of `team_ids`.
    pub async fn list_visible<'e, E>(
        executor: E,
        caller_id: Uuid,
        team_ids: &[Uuid],
        filter: BoardFilter,
    ) -> DbErrorResult<Vec<Board>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let caller = caller_id.to_string();
        let teams = serde_json::to_string(
            &team_ids.iter().map(Uuid::to_string).collect::<Vec<_>>(),
        )
        .map_err(|e| DbError::Initialization {
            message: format!("Failed to encode team ids: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rows: Vec<BoardRow> = sqlx::query_as(&format!(
            r#"
                SELECT {BOARD_COLUMNS}
                FROM boards b
                WHERE (
                        b.owner_id = ?
                        OR EXISTS (
                            SELECT 1 FROM board_members m
                            WHERE m.board_id = b.id AND m.user_id = ?
                        )
                        OR (b.kind = 'team' AND b.team_id IN (SELECT value FROM json_each(?)))
                    )
                    AND b.archived = ?
                    AND (? IS NULL OR b.kind = ?)
                ORDER BY b.updated_at DESC, b.name ASC
            "#
        ))
        .bind(&caller)
        .bind(&caller)
        .bind(teams)
        .bind(filter.archived)
        .bind(filter.kind.map(|k| k.as_str()))
        .bind(filter.kind.map(|k| k.as_str()))
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(Board::try_from).collect()
    }

    /// Writes the mutable settings: name, description, color, archived.
    pub async fn update<'e, E>(executor: E, board: &Board) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE boards
                SET name = ?, description = ?, background_color = ?, archived = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&board.name)
        .bind(&board.description)
        .bind(&board.background_color)
        .bind(board.archived)
        .bind(board.updated_at.timestamp())
        .bind(board.id.to_string())
        .execute(executor)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Board", board.id));
        }
        Ok(())
    }

    /// Foreign keys cascade to columns, cards, members and activities.
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM boards WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
