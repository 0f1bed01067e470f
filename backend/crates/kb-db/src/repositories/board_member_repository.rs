use crate::rows::board_member_row::BoardMemberRow;
use crate::Result as DbErrorResult;

use kb_core::{BoardMember, Role};

use uuid::Uuid;

pub struct BoardMemberRepository;

impl BoardMemberRepository {
    pub async fn find<'e, E>(
        executor: E,
        board_id: Uuid,
        user_id: Uuid,
    ) -> DbErrorResult<Option<BoardMember>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row: Option<BoardMemberRow> = sqlx::query_as(
            r#"
                SELECT id, board_id, user_id, role, created_at
                FROM board_members
                WHERE board_id = ? AND user_id = ?
            "#,
        )
        .bind(board_id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(BoardMember::try_from).transpose()
    }

    pub async fn find_by_board<'e, E>(executor: E, board_id: Uuid) -> DbErrorResult<Vec<BoardMember>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<BoardMemberRow> = sqlx::query_as(
            r#"
                SELECT id, board_id, user_id, role, created_at
                FROM board_members
                WHERE board_id = ?
                ORDER BY created_at ASC, user_id ASC
            "#,
        )
        .bind(board_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(BoardMember::try_from).collect()
    }

    pub async fn create<'e, E>(executor: E, member: &BoardMember) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO board_members (id, board_id, user_id, role, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(member.id.to_string())
        .bind(member.board_id.to_string())
        .bind(member.user_id.to_string())
        .bind(member.role.as_str())
        .bind(member.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn update_role<'e, E>(
        executor: E,
        board_id: Uuid,
        user_id: Uuid,
        role: Role,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result =
            sqlx::query("UPDATE board_members SET role = ? WHERE board_id = ? AND user_id = ?")
                .bind(role.as_str())
                .bind(board_id.to_string())
                .bind(user_id.to_string())
                .execute(executor)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete<'e, E>(executor: E, board_id: Uuid, user_id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM board_members WHERE board_id = ? AND user_id = ?")
            .bind(board_id.to_string())
            .bind(user_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
