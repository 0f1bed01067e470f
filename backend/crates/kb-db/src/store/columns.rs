use crate::repositories::column_repository::ColumnRepository;
use crate::store::inputs::{ColumnChanges, NewColumn};
use crate::store::outcomes::{ColumnDeletion, ColumnsChange};
use crate::{BoardStore, DbError, PositionIndex, Result as DbErrorResult};

use kb_core::{Column, Scope};

use chrono::Utc;
use log::info;
use uuid::Uuid;

impl BoardStore {
    pub async fn list_columns(&self, board_id: Uuid) -> DbErrorResult<Vec<Column>> {
        ColumnRepository::find_by_board(&self.pool, board_id).await
    }

    /// Insert a column at `input.position` (append when absent), shifting later columns right.
    pub async fn create_column(&self, board_id: Uuid, input: &NewColumn) -> DbErrorResult<ColumnsChange> {
        let scope = Scope::BoardColumns(board_id);
        let _guard = self.locks.acquire(&[scope]).await?;

        let change = self
            .retrying("create_column", move || async move {
                let mut tx = self.pool.begin().await?;

                let position = PositionIndex::open_gap(&mut tx, scope, input.position).await?;
                let mut column = Column::new(board_id, input.name.clone(), position);
                if let Some(color) = &input.color {
                    column.color = color.clone();
                }
                column.wip_limit = input.wip_limit;
                ColumnRepository::create(&mut *tx, &column).await?;

                let columns = ColumnRepository::find_by_board(&mut *tx, board_id).await?;
                tx.commit().await?;

                Ok(ColumnsChange {
                    column,
                    fields: Vec::new(),
                    moved_from: None,
                    columns,
                })
            })
            .await?;

        info!(
            "Created column {} on board {} at position {}",
            change.column.id, board_id, change.column.position
        );
        Ok(change)
    }

    /// Apply metadata changes and, when `changes.position` is set, move the column.
    pub async fn update_column(
        &self,
        column_id: Uuid,
        changes: &ColumnChanges,
    ) -> DbErrorResult<ColumnsChange> {
        let current = self.find_column(column_id).await?;
        let scope = Scope::BoardColumns(current.board_id);
        let _guard = self.locks.acquire(&[scope]).await?;

        self.retrying("update_column", move || async move {
            let mut tx = self.pool.begin().await?;

            let mut column = ColumnRepository::find_by_id(&mut *tx, column_id)
                .await?
                .ok_or_else(|| DbError::not_found("Column", column_id))?;

            let mut fields = Vec::new();
            Self::assign(&mut column.name, changes.name.clone(), "name", &mut fields);
            Self::assign(&mut column.color, changes.color.clone(), "color", &mut fields);
            Self::assign(&mut column.wip_limit, changes.wip_limit, "wip_limit", &mut fields);
            if !fields.is_empty() {
                column.updated_at = Utc::now();
                ColumnRepository::update(&mut *tx, &column).await?;
            }

            let mut moved_from = None;
            if let Some(dst) = changes.position {
                let src = column.position;
                if PositionIndex::move_within(&mut tx, scope, column_id, src, dst).await? {
                    column.position = dst;
                    moved_from = Some(src);
                }
            }

            let columns = ColumnRepository::find_by_board(&mut *tx, column.board_id).await?;
            tx.commit().await?;

            Ok(ColumnsChange {
                column,
                fields,
                moved_from,
                columns,
            })
        })
        .await
    }

    /// Delete a column with all of its cards and compact the remaining columns.
    pub async fn delete_column(&self, column_id: Uuid) -> DbErrorResult<ColumnDeletion> {
        let current = self.find_column(column_id).await?;
        let board_scope = Scope::BoardColumns(current.board_id);
        let _guard = self
            .locks
            .acquire(&[board_scope, Scope::ColumnCards(column_id)])
            .await?;

        let deletion = self
            .retrying("delete_column", move || async move {
                let mut tx = self.pool.begin().await?;

                let column = ColumnRepository::find_by_id(&mut *tx, column_id)
                    .await?
                    .ok_or_else(|| DbError::not_found("Column", column_id))?;
                let cards_removed = ColumnRepository::count_cards(&mut *tx, column_id).await?;

                ColumnRepository::delete(&mut *tx, column_id).await?;
                PositionIndex::close_gap(&mut tx, board_scope, column.position).await?;

                let columns = ColumnRepository::find_by_board(&mut *tx, column.board_id).await?;
                tx.commit().await?;

                Ok(ColumnDeletion {
                    column,
                    cards_removed,
                    columns,
                })
            })
            .await?;

        info!(
            "Deleted column {} ({} cards) from board {}",
            column_id, deletion.cards_removed, deletion.column.board_id
        );
        Ok(deletion)
    }

    /// Set every column's position from an explicit ordering of the whole board.
    pub async fn reorder_columns(&self, board_id: Uuid, column_ids: &[Uuid]) -> DbErrorResult<Vec<Column>> {
        let scope = Scope::BoardColumns(board_id);
        let _guard = self.locks.acquire(&[scope]).await?;

        self.retrying("reorder_columns", move || async move {
            let mut tx = self.pool.begin().await?;
            PositionIndex::reorder(&mut tx, scope, column_ids).await?;
            let columns = ColumnRepository::find_by_board(&mut *tx, board_id).await?;
            tx.commit().await?;
            Ok(columns)
        })
        .await
    }
}
