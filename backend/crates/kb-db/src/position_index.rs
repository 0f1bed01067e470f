//! Applies position plans to a scope inside an open transaction.
//!
//! Every function takes the transaction's connection so a whole operation
//! commits or rolls back as one unit. Callers hold the scope lock.

use crate::{DbError, Result as DbErrorResult};

use kb_core::position::{is_dense, plan_insert, plan_move, plan_remove, plan_reorder};
use kb_core::{Scope, Shift};

use sqlx::SqliteConnection;
use uuid::Uuid;

pub struct PositionIndex;

impl PositionIndex {
    fn table(scope: Scope) -> (&'static str, &'static str) {
        match scope {
            Scope::BoardColumns(_) => ("board_columns", "board_id = ?"),
            Scope::ColumnCards(_) => ("cards", "column_id = ? AND archived = 0"),
        }
    }

    pub async fn len(conn: &mut SqliteConnection, scope: Scope) -> DbErrorResult<i32> {
        let (table, filter) = Self::table(scope);
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table} WHERE {filter}"))
            .bind(scope.parent_id().to_string())
            .fetch_one(&mut *conn)
            .await?;

        i32::try_from(count).map_err(|_| DbError::conflict(format!("{scope} is too large")))
    }

    pub async fn ordered_ids(conn: &mut SqliteConnection, scope: Scope) -> DbErrorResult<Vec<Uuid>> {
        let (table, filter) = Self::table(scope);
        let ids: Vec<String> = sqlx::query_scalar(&format!(
            "SELECT id FROM {table} WHERE {filter} ORDER BY position ASC"
        ))
        .bind(scope.parent_id().to_string())
        .fetch_all(&mut *conn)
        .await?;

        ids.iter()
            .map(|id| crate::rows::decode::uuid(id, table))
            .collect()
    }

    pub async fn apply(conn: &mut SqliteConnection, scope: Scope, shift: Shift) -> DbErrorResult<u64> {
        let (table, filter) = Self::table(scope);

        let result = match shift.to {
            Some(to) => {
                sqlx::query(&format!(
                    "UPDATE {table} SET position = position + ? \
                     WHERE {filter} AND position >= ? AND position <= ?"
                ))
                .bind(shift.delta)
                .bind(scope.parent_id().to_string())
                .bind(shift.from)
                .bind(to)
                .execute(&mut *conn)
                .await?
            }
            None => {
                sqlx::query(&format!(
                    "UPDATE {table} SET position = position + ? WHERE {filter} AND position >= ?"
                ))
                .bind(shift.delta)
                .bind(scope.parent_id().to_string())
                .bind(shift.from)
                .execute(&mut *conn)
                .await?
            }
        };

        Ok(result.rows_affected())
    }

    /// Make room at `at` (append when `None`) and return the position the new member takes.
    pub async fn open_gap(
        conn: &mut SqliteConnection,
        scope: Scope,
        at: Option<i32>,
    ) -> DbErrorResult<i32> {
        let len = Self::len(conn, scope).await?;
        let plan = plan_insert(len, at)?;
        if plan.position < len {
            Self::apply(conn, scope, plan.shift).await?;
        }
        Ok(plan.position)
    }

    /// Compact the scope after the member at `position` left it.
    pub async fn close_gap(
        conn: &mut SqliteConnection,
        scope: Scope,
        position: i32,
    ) -> DbErrorResult<()> {
        Self::apply(conn, scope, plan_remove(position)).await?;
        Ok(())
    }

    /// Move `id` from `src` to `dst` within `scope`. Returns false for a no-op.
    pub async fn move_within(
        conn: &mut SqliteConnection,
        scope: Scope,
        id: Uuid,
        src: i32,
        dst: i32,
    ) -> DbErrorResult<bool> {
        let len = Self::len(conn, scope).await?;
        let Some(shift) = plan_move(len, src, dst)? else {
            return Ok(false);
        };

        // The shifted range never includes `src`, so the moved member is untouched.
        Self::apply(conn, scope, shift).await?;
        Self::set_position(conn, scope, id, dst).await?;
        Ok(true)
    }

    /// Assign `position = index` for an explicit ordering of the whole scope.
    pub async fn reorder(
        conn: &mut SqliteConnection,
        scope: Scope,
        requested: &[Uuid],
    ) -> DbErrorResult<()> {
        let current = Self::ordered_ids(conn, scope).await?;
        let assignments = plan_reorder(&current, requested)?;

        for (id, position) in assignments {
            Self::set_position(conn, scope, id, position).await?;
        }
        Ok(())
    }

    pub async fn is_dense(conn: &mut SqliteConnection, scope: Scope) -> DbErrorResult<bool> {
        let (table, filter) = Self::table(scope);
        let positions: Vec<i64> =
            sqlx::query_scalar(&format!("SELECT position FROM {table} WHERE {filter}"))
                .bind(scope.parent_id().to_string())
                .fetch_all(&mut *conn)
                .await?;

        Ok(is_dense(positions.into_iter().map(|p| p as i32)))
    }

    async fn set_position(
        conn: &mut SqliteConnection,
        scope: Scope,
        id: Uuid,
        position: i32,
    ) -> DbErrorResult<()> {
        let (table, filter) = Self::table(scope);
        let result = sqlx::query(&format!(
            "UPDATE {table} SET position = ? WHERE id = ? AND {filter}"
        ))
        .bind(position)
        .bind(id.to_string())
        .bind(scope.parent_id().to_string())
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::invalid_reference(format!("{id} is not part of {scope}")));
        }
        Ok(())
    }
}
