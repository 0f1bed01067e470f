use crate::repositories::board_repository::{BoardFilter, BoardRepository};
use crate::repositories::card_repository::CardRepository;
use crate::repositories::column_repository::ColumnRepository;
use crate::store::inputs::{BoardChanges, NewBoard};
use crate::store::outcomes::{BoardArchival, BoardDetail, BoardUpdate, ColumnWithCards};
use crate::{BoardStore, DbError, Result as DbErrorResult};

use kb_core::{Board, Card, Column, Scope};

use std::collections::HashMap;

use chrono::Utc;
use log::info;
use uuid::Uuid;

impl BoardStore {
    /// Create a board, materializing its template columns and cards in the same transaction.
    pub async fn create_board(&self, input: &NewBoard, owner_id: Uuid) -> DbErrorResult<BoardDetail> {
        let board = self
            .retrying("create_board", move || self.create_board_once(input, owner_id))
            .await?;

        info!(
            "Created board {} with {} template columns",
            board.id,
            input.template.len()
        );
        self.board_detail(board.id).await
    }

    async fn create_board_once(&self, input: &NewBoard, owner_id: Uuid) -> DbErrorResult<Board> {
        let mut board = Board::new(input.name.clone(), input.kind, input.team_id, owner_id)?;
        board.description = input.description.clone();
        if let Some(color) = &input.background_color {
            board.background_color = color.clone();
        }

        let mut tx = self.pool.begin().await?;
        BoardRepository::create(&mut *tx, &board).await?;

        for (column_index, template_column) in input.template.iter().enumerate() {
            let mut column = Column::new(
                board.id,
                template_column.name.clone(),
                column_index as i32,
            );
            if let Some(color) = &template_column.color {
                column.color = color.clone();
            }
            column.wip_limit = template_column.wip_limit;
            ColumnRepository::create(&mut *tx, &column).await?;

            for (card_index, template_card) in template_column.cards.iter().enumerate() {
                let mut card = Card::new(
                    &column,
                    template_card.title.clone(),
                    card_index as i32,
                    owner_id,
                );
                card.description = template_card.description.clone();
                card.priority = template_card.priority.unwrap_or_default();
                CardRepository::create(&mut *tx, &card).await?;
            }
        }

        tx.commit().await?;
        Ok(board)
    }

    pub async fn list_boards(
        &self,
        caller_id: Uuid,
        team_ids: &[Uuid],
        filter: BoardFilter,
    ) -> DbErrorResult<Vec<Board>> {
        BoardRepository::list_visible(&self.pool, caller_id, team_ids, filter).await
    }

    /// The board with its columns left to right, each holding its live cards in order.
    pub async fn board_detail(&self, board_id: Uuid) -> DbErrorResult<BoardDetail> {
        let mut tx = self.pool.begin().await?;

        let board = BoardRepository::find_by_id(&mut *tx, board_id)
            .await?
            .ok_or_else(|| DbError::not_found("Board", board_id))?;
        let columns = ColumnRepository::find_by_board(&mut *tx, board_id).await?;
        let cards = CardRepository::find_live_by_board(&mut *tx, board_id).await?;

        tx.commit().await?;

        let mut by_column: HashMap<Uuid, Vec<Card>> = HashMap::new();
        for card in cards {
            by_column.entry(card.column_id).or_default().push(card);
        }

        let columns = columns
            .into_iter()
            .map(|column| ColumnWithCards {
                cards: by_column.remove(&column.id).unwrap_or_default(),
                column,
            })
            .collect();

        Ok(BoardDetail { board, columns })
    }

    /// Last writer wins.
    /// Values equal to the stored ones are not written and not reported as changed.
    pub async fn update_board(&self, board_id: Uuid, changes: &BoardChanges) -> DbErrorResult<BoardUpdate> {
        self.retrying("update_board", move || async move {
            let mut tx = self.pool.begin().await?;
            let mut board = BoardRepository::find_by_id(&mut *tx, board_id)
                .await?
                .ok_or_else(|| DbError::not_found("Board", board_id))?;

            let mut fields = Vec::new();
            Self::assign(&mut board.name, changes.name.clone(), "name", &mut fields);
            Self::assign(
                &mut board.description,
                changes.description.clone(),
                "description",
                &mut fields,
            );
            Self::assign(
                &mut board.background_color,
                changes.background_color.clone(),
                "background_color",
                &mut fields,
            );

            if !fields.is_empty() {
                board.updated_at = Utc::now();
                BoardRepository::update(&mut *tx, &board).await?;
            }
            tx.commit().await?;
            Ok(BoardUpdate { board, fields })
        })
        .await
    }

    pub async fn set_board_archived(&self, board_id: Uuid, archived: bool) -> DbErrorResult<BoardArchival> {
        self.retrying("set_board_archived", move || async move {
            let mut tx = self.pool.begin().await?;
            let mut board = BoardRepository::find_by_id(&mut *tx, board_id)
                .await?
                .ok_or_else(|| DbError::not_found("Board", board_id))?;

            let changed = board.archived != archived;
            if changed {
                board.archived = archived;
                board.updated_at = Utc::now();
                BoardRepository::update(&mut *tx, &board).await?;
            }

            tx.commit().await?;
            Ok(BoardArchival { board, changed })
        })
        .await
    }

    /// Removes the board and everything under it.
    pub async fn delete_board(&self, board_id: Uuid) -> DbErrorResult<()> {
        let _guard = self.locks.acquire(&[Scope::BoardColumns(board_id)]).await?;

        let deleted = self
            .retrying("delete_board", move || async move {
                BoardRepository::delete(&self.pool, board_id).await
            })
            .await?;

        if !deleted {
            return Err(DbError::not_found("Board", board_id));
        }

        info!("Deleted board {}", board_id);
        Ok(())
    }
}
