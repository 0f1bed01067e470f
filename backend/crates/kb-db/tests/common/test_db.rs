use kb_db::{BoardStore, RetryPolicy, ScopeLocks};

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    kb_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn create_test_store(pool: &SqlitePool) -> BoardStore {
    BoardStore::new(
        pool.clone(),
        ScopeLocks::new(Duration::from_secs(5)),
        RetryPolicy::default(),
    )
}

/// Mirrors a host team membership row
pub async fn add_team_member(pool: &SqlitePool, team_id: Uuid, user_id: Uuid) {
    sqlx::query("INSERT INTO team_members (team_id, user_id) VALUES (?, ?)")
        .bind(team_id.to_string())
        .bind(user_id.to_string())
        .execute(pool)
        .await
        .expect("Failed to add team member");
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
