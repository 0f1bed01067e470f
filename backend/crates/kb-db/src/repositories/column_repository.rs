use crate::rows::column_row::ColumnRow;
use crate::{DbError, Result as DbErrorResult};

use kb_core::Column;

use uuid::Uuid;

pub struct ColumnRepository;

impl ColumnRepository {
    pub async fn create<'e, E>(executor: E, column: &Column) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO board_columns (
                    id, board_id, name, position, wip_limit, color, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(column.id.to_string())
        .bind(column.board_id.to_string())
        .bind(&column.name)
        .bind(column.position)
        .bind(column.wip_limit)
        .bind(&column.color)
        .bind(column.created_at.timestamp())
        .bind(column.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Column>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row: Option<ColumnRow> = sqlx::query_as(
            r#"
                SELECT id, board_id, name, position, wip_limit, color, created_at, updated_at
                FROM board_columns
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Column::try_from).transpose()
    }

    /// Left-to-right order.
    pub async fn find_by_board<'e, E>(executor: E, board_id: Uuid) -> DbErrorResult<Vec<Column>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<ColumnRow> = sqlx::query_as(
            r#"
                SELECT id, board_id, name, position, wip_limit, color, created_at, updated_at
                FROM board_columns
                WHERE board_id = ?
                ORDER BY position ASC
            "#,
        )
        .bind(board_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(Column::try_from).collect()
    }

    /// Writes name, color and WIP limit. Position is owned by the position index.
    pub async fn update<'e, E>(executor: E, column: &Column) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE board_columns
                SET name = ?, color = ?, wip_limit = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&column.name)
        .bind(&column.color)
        .bind(column.wip_limit)
        .bind(column.updated_at.timestamp())
        .bind(column.id.to_string())
        .execute(executor)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Column", column.id));
        }
        Ok(())
    }

    /// Cards of the column go with it.
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM board_columns WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All cards of the column, archived included.
    pub async fn count_cards<'e, E>(executor: E, id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cards WHERE column_id = ?")
            .bind(id.to_string())
            .fetch_one(executor)
            .await?;

        Ok(count.max(0) as u64)
    }
}
