use crate::Result as DbErrorResult;
use crate::repositories::activity_repository::ActivityRepository;

use kb_core::Activity;

use async_trait::async_trait;
use sqlx::SqlitePool;

/// Append-only destination for activity records, written after a mutation commits.
#[async_trait]
pub trait ActivitySink: Send + Sync {
    async fn append(&self, activity: &Activity) -> DbErrorResult<()>;
}

pub struct SqliteActivitySink {
    pool: SqlitePool,
}

impl SqliteActivitySink {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivitySink for SqliteActivitySink {
    async fn append(&self, activity: &Activity) -> DbErrorResult<()> {
        ActivityRepository::create(&self.pool, activity).await
    }
}
