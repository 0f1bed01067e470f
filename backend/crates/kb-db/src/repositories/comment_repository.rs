use crate::rows::comment_row::CommentRow;
use crate::Result as DbErrorResult;

use kb_core::Comment;

use uuid::Uuid;

pub struct CommentRepository;

impl CommentRepository {
    pub async fn create<'e, E>(executor: E, comment: &Comment) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO comments (id, card_id, author_id, content, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(comment.id.to_string())
        .bind(comment.card_id.to_string())
        .bind(comment.author_id.to_string())
        .bind(&comment.content)
        .bind(comment.created_at.timestamp())
        .bind(comment.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Comment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row: Option<CommentRow> = sqlx::query_as(
            r#"
                SELECT id, card_id, author_id, content, created_at, updated_at
                FROM comments
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(Comment::try_from).transpose()
    }

    /// Oldest first.
    pub async fn find_by_card<'e, E>(executor: E, card_id: Uuid) -> DbErrorResult<Vec<Comment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<CommentRow> = sqlx::query_as(
            r#"
                SELECT id, card_id, author_id, content, created_at, updated_at
                FROM comments
                WHERE card_id = ?
                ORDER BY created_at ASC, rowid ASC
            "#,
        )
        .bind(card_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
