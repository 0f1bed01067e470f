use crate::Result as DbErrorResult;

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Team membership as known to the host application.
#[async_trait]
pub trait TeamDirectory: Send + Sync {
    async fn is_member(&self, team_id: Uuid, user_id: Uuid) -> DbErrorResult<bool>;

    async fn teams_of(&self, user_id: Uuid) -> DbErrorResult<Vec<Uuid>>;
}

/// Reads the host's `team_members` table.
pub struct SqliteTeamDirectory {
    pool: SqlitePool,
}

impl SqliteTeamDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamDirectory for SqliteTeamDirectory {
    async fn is_member(&self, team_id: Uuid, user_id: Uuid) -> DbErrorResult<bool> {
        let found: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM team_members WHERE team_id = ? AND user_id = ?")
                .bind(team_id.to_string())
                .bind(user_id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        Ok(found.is_some())
    }

    async fn teams_of(&self, user_id: Uuid) -> DbErrorResult<Vec<Uuid>> {
        let ids: Vec<String> =
            sqlx::query_scalar("SELECT team_id FROM team_members WHERE user_id = ?")
                .bind(user_id.to_string())
                .fetch_all(&self.pool)
                .await?;

        ids.iter()
            .map(|id| crate::rows::decode::uuid(id, "team_members.team_id"))
            .collect()
    }
}
