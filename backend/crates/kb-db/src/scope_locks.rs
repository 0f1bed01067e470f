use crate::{DbError, Result as DbErrorResult};

use kb_core::Scope;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use log::debug;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

const PRUNE_THRESHOLD: usize = 1024;

/// In-process mutual exclusion per ordering scope.
///
/// Locks are taken in `Scope` order, so two operations that need the same pair
/// of scopes cannot deadlock.
#[derive(Clone)]
pub struct ScopeLocks {
    registry: Arc<Mutex<HashMap<Scope, Arc<AsyncMutex<()>>>>>,
    timeout: Duration,
}

/// Held scopes are released on drop.
#[derive(Debug)]
pub struct ScopeGuard {
    _guards: Vec<OwnedMutexGuard<()>>,
}

impl ScopeLocks {
    pub fn new(timeout: Duration) -> Self {
        Self {
            registry: Arc::new(Mutex::new(HashMap::new())),
            timeout,
        }
    }

    pub fn from_config(config: &kb_config::ConcurrencyConfig) -> Self {
        Self::new(Duration::from_millis(config.lock_timeout_ms))
    }

    /// Acquire every scope in `scopes`, waiting at most the configured timeout in total.
    pub async fn acquire(&self, scopes: &[Scope]) -> DbErrorResult<ScopeGuard> {
        let mut ordered = scopes.to_vec();
        ordered.sort();
        ordered.dedup();

        let locks: Vec<Arc<AsyncMutex<()>>> = ordered.iter().map(|s| self.lock_for(*s)).collect();

        let acquire_all = async move {
            let mut guards = Vec::with_capacity(locks.len());
            for lock in locks {
                guards.push(lock.lock_owned().await);
            }
            guards
        };

        match tokio::time::timeout(self.timeout, acquire_all).await {
            Ok(guards) => Ok(ScopeGuard { _guards: guards }),
            Err(_) => {
                debug!("Timed out after {:?} waiting for {:?}", self.timeout, ordered);
                Err(DbError::conflict(format!(
                    "timed out waiting for {}",
                    ordered
                        .iter()
                        .map(Scope::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                )))
            }
        }
    }

    fn lock_for(&self, scope: Scope) -> Arc<AsyncMutex<()>> {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        if registry.len() >= PRUNE_THRESHOLD {
            registry.retain(|_, lock| Arc::strong_count(lock) > 1);
        }
        registry
            .entry(scope)
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }
}
