use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_LOCK_TIMEOUT_MS: u64 = 10;
pub const MAX_LOCK_TIMEOUT_MS: u64 = 60000;
pub const DEFAULT_LOCK_TIMEOUT_MS: u64 = 5000;

/// Bounds on waiting for a scope lock before reporting a conflict.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConcurrencyConfig {
    pub lock_timeout_ms: u64,
}

impl Default for ConcurrencyConfig {
    fn default() -> Self {
        Self {
            lock_timeout_ms: DEFAULT_LOCK_TIMEOUT_MS,
        }
    }
}

impl ConcurrencyConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.lock_timeout_ms < MIN_LOCK_TIMEOUT_MS || self.lock_timeout_ms > MAX_LOCK_TIMEOUT_MS
        {
            return Err(ConfigError::invalid("concurrency", format!(
                "concurrency.lock_timeout_ms must be {}-{}, got {}",
                MIN_LOCK_TIMEOUT_MS, MAX_LOCK_TIMEOUT_MS, self.lock_timeout_ms
            )));
        }
        Ok(())
    }
}
