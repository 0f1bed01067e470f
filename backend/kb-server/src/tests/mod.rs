mod api;

use crate::AppState;

use kb_config::Config;

use metrics_exporter_prometheus::PrometheusBuilder;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Migrated in-memory database behind a single connection
pub(crate) async fn create_test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            "sqlite::memory:"
                .parse::<SqliteConnectOptions>()
                .unwrap()
                .foreign_keys(true),
        )
        .await
        .expect("Failed to create test pool");

    kb_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let prometheus = PrometheusBuilder::new().build_recorder().handle();
    AppState::new(pool, &Config::default(), prometheus)
}
