//! Transactional board operations.
//!
//! Every position-changing operation takes the scope locks it needs, then runs
//! its reads and writes in one transaction. Busy-database failures are retried
//! under the configured policy while the locks stay held; when retries run out
//! the caller sees a concurrency conflict.

mod boards;
mod cards;
mod columns;
mod comments;
pub mod inputs;
mod members;
pub mod outcomes;

use crate::repositories::board_repository::BoardRepository;
use crate::repositories::card_repository::CardRepository;
use crate::repositories::column_repository::ColumnRepository;
use crate::repositories::comment_repository::CommentRepository;
use crate::retry::{IsRetryable, RetryPolicy, with_retry};
use crate::{DbError, Result as DbErrorResult, ScopeLocks};

use kb_core::{Board, Card, Column, Comment};

use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Clone)]
pub struct BoardStore {
    pool: SqlitePool,
    locks: ScopeLocks,
    retry: RetryPolicy,
}

impl BoardStore {
    pub fn new(pool: SqlitePool, locks: ScopeLocks, retry: RetryPolicy) -> Self {
        Self { pool, locks, retry }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn find_board(&self, id: Uuid) -> DbErrorResult<Board> {
        BoardRepository::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| DbError::not_found("Board", id))
    }

    pub async fn find_column(&self, id: Uuid) -> DbErrorResult<Column> {
        ColumnRepository::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| DbError::not_found("Column", id))
    }

    pub async fn find_card(&self, id: Uuid) -> DbErrorResult<Card> {
        CardRepository::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| DbError::not_found("Card", id))
    }

    pub async fn find_comment(&self, id: Uuid) -> DbErrorResult<Comment> {
        CommentRepository::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| DbError::not_found("Comment", id))
    }

    /// Overwrite `slot` when `value` is given and differs, noting `name` as changed.
    fn assign<T: PartialEq>(slot: &mut T, value: Option<T>, name: &str, changed: &mut Vec<String>) {
        match value {
            Some(value) if *slot != value => {
                *slot = value;
                changed.push(name.to_string());
            }
            _ => {}
        }
    }

    async fn retrying<T, F, Fut>(&self, operation_name: &str, operation: F) -> DbErrorResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = DbErrorResult<T>>,
    {
        with_retry(&self.retry, operation_name, operation)
            .await
            .map_err(|e| {
                if e.is_retryable() {
                    DbError::conflict(format!("{operation_name}: database stayed busy ({e})"))
                } else {
                    e
                }
            })
    }
}
