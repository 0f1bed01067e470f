use crate::rows::card_row::CardRow;
use crate::{DbError, Result as DbErrorResult};

use kb_core::Card;

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

pub struct CardRepository;

impl CardRepository {
    pub async fn create<'e, E>(executor: E, card: &Card) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let labels = Self::encode_labels(&card.labels)?;

        sqlx::query(
            r#"
                INSERT INTO cards (
                    id, column_id, board_id, position, title, description, priority,
                    due_date, assignee_id, labels, archived, created_by, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(card.id.to_string())
        .bind(card.column_id.to_string())
        .bind(card.board_id.to_string())
        .bind(card.position)
        .bind(&card.title)
        .bind(&card.description)
        .bind(card.priority.as_str())
        .bind(card.due_date.map(|d| d.timestamp()))
        .bind(card.assignee_id.map(|id| id.to_string()))
        .bind(labels)
        .bind(card.archived)
        .bind(card.created_by.to_string())
        .bind(card.created_at.timestamp())
        .bind(card.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Card>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row: Option<CardRow> = sqlx::query_as(
            r#"
                SELECT id, column_id, board_id, position, title, description, priority,
                       due_date, assignee_id, labels, archived, created_by, created_at, updated_at
                FROM cards
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Card::try_from).transpose()
    }

    /// Non-archived cards of a column in position order.
    pub async fn find_live_by_column<'e, E>(executor: E, column_id: Uuid) -> DbErrorResult<Vec<Card>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<CardRow> = sqlx::query_as(
            r#"
                SELECT id, column_id, board_id, position, title, description, priority,
                       due_date, assignee_id, labels, archived, created_by, created_at, updated_at
                FROM cards
                WHERE column_id = ? AND archived = 0
                ORDER BY position ASC
            "#,
        )
        .bind(column_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(Card::try_from).collect()
    }

    /// Non-archived cards of every column of a board, grouped by column and in position order.
    pub async fn find_live_by_board<'e, E>(executor: E, board_id: Uuid) -> DbErrorResult<Vec<Card>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<CardRow> = sqlx::query_as(
            r#"
                SELECT id, column_id, board_id, position, title, description, priority,
                       due_date, assignee_id, labels, archived, created_by, created_at, updated_at
                FROM cards
                WHERE board_id = ? AND archived = 0
                ORDER BY column_id ASC, position ASC
            "#,
        )
        .bind(board_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(Card::try_from).collect()
    }

    /// Writes the card's content fields. Column, position and archive state are
    /// changed through the position-aware operations only.
    pub async fn update<'e, E>(executor: E, card: &Card) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let labels = Self::encode_labels(&card.labels)?;

        let result = sqlx::query(
            r#"
                UPDATE cards
                SET title = ?, description = ?, priority = ?, due_date = ?,
                    assignee_id = ?, labels = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&card.title)
        .bind(&card.description)
        .bind(card.priority.as_str())
        .bind(card.due_date.map(|d| d.timestamp()))
        .bind(card.assignee_id.map(|id| id.to_string()))
        .bind(labels)
        .bind(card.updated_at.timestamp())
        .bind(card.id.to_string())
        .execute(executor)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Card", card.id));
        }
        Ok(())
    }

    pub async fn place<'e, E>(
        executor: E,
        id: Uuid,
        column_id: Uuid,
        position: i32,
        updated_at: i64,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("UPDATE cards SET column_id = ?, position = ?, updated_at = ? WHERE id = ?")
            .bind(column_id.to_string())
            .bind(position)
            .bind(updated_at)
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }

    /// Position is written alongside the flag so an unarchived card lands at the end.
    pub async fn set_archived<'e, E>(
        executor: E,
        id: Uuid,
        archived: bool,
        position: i32,
        updated_at: i64,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("UPDATE cards SET archived = ?, position = ?, updated_at = ? WHERE id = ?")
            .bind(archived)
            .bind(position)
            .bind(updated_at)
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM cards WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[track_caller]
    fn encode_labels(labels: &[String]) -> DbErrorResult<String> {
        serde_json::to_string(labels).map_err(|e| DbError::Initialization {
            message: format!("Failed to encode card.labels: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
