use crate::DbError;

use std::time::Duration;

use tokio::time::sleep;

// SQLITE_BUSY and SQLITE_LOCKED; extended codes keep the primary code in the low byte.
const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;

/// Backoff policy for transactions that hit a busy database.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    pub jitter: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&kb_config::RetryConfig::default())
    }
}

impl From<&kb_config::RetryConfig> for RetryPolicy {
    fn from(config: &kb_config::RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            initial_delay: Duration::from_millis(config.initial_delay_ms),
            max_delay: Duration::from_millis(config.max_delay_ms),
            backoff_multiplier: config.backoff_multiplier,
            jitter: config.jitter,
        }
    }
}

/// Execute an async operation, retrying while it fails with a retryable error.
pub async fn with_retry<F, Fut, T, E>(
    policy: &RetryPolicy,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display + IsRetryable,
{
    let mut attempts = 0;
    let mut delay = policy.initial_delay;

    loop {
        attempts += 1;

        match operation().await {
            Ok(result) => {
                if attempts > 1 {
                    log::info!("{} succeeded after {} attempts", operation_name, attempts);
                }
                return Ok(result);
            }
            Err(e) => {
                if !e.is_retryable() || attempts >= policy.max_attempts {
                    if e.is_retryable() {
                        log::warn!(
                            "{} failed after {} attempts: {}",
                            operation_name,
                            attempts,
                            e
                        );
                    }
                    return Err(e);
                }

                let actual_delay = if policy.jitter {
                    let jitter_factor = 0.75 + rand::random::<f64>() * 0.5; // 0.75 to 1.25
                    Duration::from_secs_f64(delay.as_secs_f64() * jitter_factor)
                } else {
                    delay
                };

                log::debug!(
                    "{} attempt {} failed: {}. Retrying in {:?}",
                    operation_name,
                    attempts,
                    e,
                    actual_delay
                );

                sleep(actual_delay).await;

                delay = Duration::from_secs_f64(
                    (delay.as_secs_f64() * policy.backoff_multiplier)
                        .min(policy.max_delay.as_secs_f64()),
                );
            }
        }
    }
}

/// Errors that may succeed when the operation is repeated
pub trait IsRetryable {
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for DbError {
    fn is_retryable(&self) -> bool {
        match self {
            DbError::Sqlx { source, .. } => match source {
                sqlx::Error::PoolTimedOut => true,
                sqlx::Error::Database(db) => db
                    .code()
                    .and_then(|code| code.parse::<i32>().ok())
                    .is_some_and(|code| matches!(code & 0xff, SQLITE_BUSY | SQLITE_LOCKED)),
                _ => false,
            },
            _ => false,
        }
    }
}
