use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Retry constraints
pub const MIN_MAX_ATTEMPTS: u32 = 1;
pub const MAX_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

pub const MIN_INITIAL_DELAY_MS: u64 = 1;
pub const MAX_INITIAL_DELAY_MS: u64 = 10000;
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 20;

pub const MIN_MAX_DELAY_MS: u64 = 10;
pub const MAX_MAX_DELAY_MS: u64 = 60000;
pub const DEFAULT_MAX_DELAY_MS: u64 = 1000;

pub const MIN_BACKOFF_MULTIPLIER: f64 = 1.0;
pub const MAX_BACKOFF_MULTIPLIER: f64 = 10.0;
pub const DEFAULT_BACKOFF_MULTIPLIER: f64 = 2.0;

pub const DEFAULT_JITTER: bool = true;

/// Retry policy for transactions that hit a busy or locked database.
///
/// Delays grow exponentially from `initial_delay_ms` up to `max_delay_ms`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts, including the first
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_multiplier: f64,
    /// Randomize each delay by ±25%
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
            jitter: DEFAULT_JITTER,
        }
    }
}

impl RetryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_attempts < MIN_MAX_ATTEMPTS || self.max_attempts > MAX_MAX_ATTEMPTS {
            return Err(ConfigError::invalid("retry", format!(
                "retry.max_attempts must be {}-{}, got {}",
                MIN_MAX_ATTEMPTS, MAX_MAX_ATTEMPTS, self.max_attempts
            )));
        }

        if self.initial_delay_ms < MIN_INITIAL_DELAY_MS
            || self.initial_delay_ms > MAX_INITIAL_DELAY_MS
        {
            return Err(ConfigError::invalid("retry", format!(
                "retry.initial_delay_ms must be {}-{}, got {}",
                MIN_INITIAL_DELAY_MS, MAX_INITIAL_DELAY_MS, self.initial_delay_ms
            )));
        }

        if self.max_delay_ms < MIN_MAX_DELAY_MS || self.max_delay_ms > MAX_MAX_DELAY_MS {
            return Err(ConfigError::invalid("retry", format!(
                "retry.max_delay_ms must be {}-{}, got {}",
                MIN_MAX_DELAY_MS, MAX_MAX_DELAY_MS, self.max_delay_ms
            )));
        }

        if self.max_delay_ms < self.initial_delay_ms {
            return Err(ConfigError::invalid("retry", format!(
                "retry.max_delay_ms ({}) must be >= retry.initial_delay_ms ({})",
                self.max_delay_ms, self.initial_delay_ms
            )));
        }

        if self.backoff_multiplier < MIN_BACKOFF_MULTIPLIER
            || self.backoff_multiplier > MAX_BACKOFF_MULTIPLIER
        {
            return Err(ConfigError::invalid("retry", format!(
                "retry.backoff_multiplier must be {}-{}, got {}",
                MIN_BACKOFF_MULTIPLIER, MAX_BACKOFF_MULTIPLIER, self.backoff_multiplier
            )));
        }

        Ok(())
    }
}
