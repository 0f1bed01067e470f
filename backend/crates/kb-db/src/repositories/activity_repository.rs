use crate::Result as DbErrorResult;

use kb_core::Activity;

/// Append-only; activities are never read back by the store.
pub struct ActivityRepository;

impl ActivityRepository {
    pub async fn create<'e, E>(executor: E, activity: &Activity) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let metadata = activity.metadata_json()?;

        sqlx::query(
            r#"
                INSERT INTO activities (id, board_id, card_id, actor_id, kind, metadata, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(activity.id.to_string())
        .bind(activity.board_id.to_string())
        .bind(activity.card_id.map(|id| id.to_string()))
        .bind(activity.actor_id.map(|id| id.to_string()))
        .bind(activity.type_tag())
        .bind(metadata)
        .bind(activity.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }
}
