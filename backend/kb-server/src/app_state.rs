use crate::Metrics;

use kb_config::{Config, ValidationConfig};
use kb_db::{
    AccessControl, ActivitySink, BoardStore, RetryPolicy, ScopeLocks, SqliteActivitySink,
    SqliteTeamDirectory,
};

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared handles passed to every handler by the router
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub store: BoardStore,
    pub access: AccessControl,
    pub activity: Arc<dyn ActivitySink>,
    pub metrics: Metrics,
    pub prometheus: PrometheusHandle,
    pub validation: ValidationConfig,
    /// Empty allows any origin
    pub cors_origins: Vec<String>,
}

impl AppState {
    /// Wire the SQLite-backed store, access control and activity sink from `config`.
    pub fn new(pool: SqlitePool, config: &Config, prometheus: PrometheusHandle) -> Self {
        let store = BoardStore::new(
            pool.clone(),
            ScopeLocks::from_config(&config.concurrency),
            RetryPolicy::from(&config.retry),
        );
        let access = AccessControl::new(
            pool.clone(),
            Arc::new(SqliteTeamDirectory::new(pool.clone())),
        );

        Self {
            activity: Arc::new(SqliteActivitySink::new(pool.clone())),
            pool,
            store,
            access,
            metrics: Metrics::new(),
            prometheus,
            validation: config.validation.clone(),
            cors_origins: config.server.cors_origins.clone(),
        }
    }
}
