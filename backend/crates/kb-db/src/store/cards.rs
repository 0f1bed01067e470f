use crate::repositories::card_repository::CardRepository;
use crate::repositories::column_repository::ColumnRepository;
use crate::store::inputs::{CardChanges, NewCard};
use crate::store::outcomes::{CardMove, CardUpdate, CardsChange};
use crate::{BoardStore, DbError, PositionIndex, Result as DbErrorResult};

use kb_core::position::plan_insert;
use kb_core::{Card, Scope};

use chrono::Utc;
use log::info;
use sqlx::SqliteConnection;
use uuid::Uuid;

impl BoardStore {
    pub async fn list_cards(&self, column_id: Uuid) -> DbErrorResult<Vec<Card>> {
        CardRepository::find_live_by_column(&self.pool, column_id).await
    }

    /// Insert a card at `input.position` (append when absent), shifting later cards down.
    pub async fn create_card(
        &self,
        column_id: Uuid,
        input: &NewCard,
        created_by: Uuid,
    ) -> DbErrorResult<CardsChange> {
        let scope = Scope::ColumnCards(column_id);
        let _guard = self.locks.acquire(&[scope]).await?;

        let change = self
            .retrying("create_card", move || async move {
                let mut tx = self.pool.begin().await?;

                let column = ColumnRepository::find_by_id(&mut *tx, column_id)
                    .await?
                    .ok_or_else(|| DbError::not_found("Column", column_id))?;

                let position = PositionIndex::open_gap(&mut tx, scope, input.position).await?;
                let mut card = Card::new(&column, input.title.clone(), position, created_by);
                card.description = input.description.clone();
                card.priority = input.priority;
                card.due_date = input.due_date;
                card.assignee_id = input.assignee_id;
                card.labels = input.labels.clone();
                CardRepository::create(&mut *tx, &card).await?;

                let cards = CardRepository::find_live_by_column(&mut *tx, column_id).await?;
                tx.commit().await?;

                Ok(CardsChange { card, cards })
            })
            .await?;

        info!(
            "Created card {} in column {} at position {}",
            change.card.id, column_id, change.card.position
        );
        Ok(change)
    }

    /// Content changes only; placement goes through [`BoardStore::move_card`]. Last writer wins.
    ///
    /// Values equal to the stored ones are not written and not reported as changed.
    pub async fn update_card(&self, card_id: Uuid, changes: &CardChanges) -> DbErrorResult<CardUpdate> {
        self.retrying("update_card", move || async move {
            let mut tx = self.pool.begin().await?;

            let mut card = CardRepository::find_by_id(&mut *tx, card_id)
                .await?
                .ok_or_else(|| DbError::not_found("Card", card_id))?;

            let mut fields = Vec::new();
            Self::assign(&mut card.title, changes.title.clone(), "title", &mut fields);
            Self::assign(
                &mut card.description,
                changes.description.clone(),
                "description",
                &mut fields,
            );
            Self::assign(&mut card.priority, changes.priority, "priority", &mut fields);
            Self::assign(&mut card.due_date, changes.due_date, "due_date", &mut fields);
            Self::assign(&mut card.assignee_id, changes.assignee_id, "assignee_id", &mut fields);
            Self::assign(&mut card.labels, changes.labels.clone(), "labels", &mut fields);

            if !fields.is_empty() {
                card.updated_at = Utc::now();
                CardRepository::update(&mut *tx, &card).await?;
            }
            tx.commit().await?;
            Ok(CardUpdate { card, fields })
        })
        .await
    }

    /// Archiving removes the card from its column's ordering; unarchiving appends it again.
    ///
    /// Setting the flag to its current value changes nothing.
    pub async fn set_card_archived(&self, card_id: Uuid, archived: bool) -> DbErrorResult<CardsChange> {
        let column_id = self.find_card(card_id).await?.column_id;
        let scope = Scope::ColumnCards(column_id);
        let _guard = self.locks.acquire(&[scope]).await?;

        self.retrying("set_card_archived", move || async move {
            let mut tx = self.pool.begin().await?;

            let mut card = Self::locked_card(&mut tx, card_id, column_id).await?;

            if card.archived != archived {
                let now = Utc::now();
                if archived {
                    CardRepository::set_archived(&mut *tx, card_id, true, card.position, now.timestamp())
                        .await?;
                    PositionIndex::close_gap(&mut tx, scope, card.position).await?;
                } else {
                    let position = PositionIndex::len(&mut tx, scope).await?;
                    CardRepository::set_archived(&mut *tx, card_id, false, position, now.timestamp())
                        .await?;
                    card.position = position;
                }
                card.archived = archived;
                card.updated_at = now;
            }

            let cards = CardRepository::find_live_by_column(&mut *tx, card.column_id).await?;
            tx.commit().await?;

            Ok(CardsChange { card, cards })
        })
        .await
    }

    /// Move a live card to `position` in `target_column_id` (append when absent).
    ///
    /// Both columns must belong to the card's board. Within one column the
    /// destination must be an existing slot; across columns it may also be the
    /// slot just past the last card.
    pub async fn move_card(
        &self,
        card_id: Uuid,
        target_column_id: Uuid,
        position: Option<i32>,
    ) -> DbErrorResult<CardMove> {
        let current = self.find_card(card_id).await?;
        if current.archived {
            return Err(DbError::validation(
                "archived cards must be unarchived before moving",
                "archived",
            ));
        }

        let target = self.find_column(target_column_id).await?;
        if target.board_id != current.board_id {
            return Err(DbError::invalid_reference(format!(
                "column {target_column_id} is not on the card's board"
            )));
        }

        let source_column_id = current.column_id;
        let source_scope = Scope::ColumnCards(source_column_id);
        let target_scope = Scope::ColumnCards(target_column_id);
        let _guard = self.locks.acquire(&[source_scope, target_scope]).await?;

        let outcome = self
            .retrying("move_card", move || async move {
                let mut tx = self.pool.begin().await?;

                let mut card = Self::locked_card(&mut tx, card_id, source_column_id).await?;
                if card.archived {
                    return Err(DbError::conflict(format!("card {card_id} was archived concurrently")));
                }
                let from_position = card.position;

                let moved = if source_scope == target_scope {
                    let len = PositionIndex::len(&mut tx, source_scope).await?;
                    let dst = position.unwrap_or(len - 1);
                    PositionIndex::move_within(&mut tx, source_scope, card_id, from_position, dst)
                        .await?
                        .then_some(dst)
                } else {
                    // The target may have been deleted while waiting for its scope.
                    ColumnRepository::find_by_id(&mut *tx, target_column_id)
                        .await?
                        .ok_or_else(|| DbError::not_found("Column", target_column_id))?;

                    let len = PositionIndex::len(&mut tx, target_scope).await?;
                    let dst = plan_insert(len, position)?.position;

                    PositionIndex::close_gap(&mut tx, source_scope, from_position).await?;
                    PositionIndex::open_gap(&mut tx, target_scope, Some(dst)).await?;
                    CardRepository::place(
                        &mut *tx,
                        card_id,
                        target_column_id,
                        dst,
                        Utc::now().timestamp(),
                    )
                    .await?;
                    Some(dst)
                };

                if let Some(dst) = moved {
                    card.column_id = target_column_id;
                    card.position = dst;
                    card.updated_at = Utc::now();
                }

                let source_cards =
                    CardRepository::find_live_by_column(&mut *tx, source_column_id).await?;
                let target_cards = if source_scope == target_scope {
                    source_cards.clone()
                } else {
                    CardRepository::find_live_by_column(&mut *tx, target_column_id).await?
                };
                tx.commit().await?;

                Ok(CardMove {
                    card,
                    from_column_id: source_column_id,
                    from_position,
                    moved: moved.is_some(),
                    source_cards,
                    target_cards,
                })
            })
            .await?;

        if outcome.moved {
            info!(
                "Moved card {} from {}:{} to {}:{}",
                card_id,
                outcome.from_column_id,
                outcome.from_position,
                target_column_id,
                outcome.card.position
            );
        }
        Ok(outcome)
    }

    /// Delete a card, compacting its column when it was live.
    pub async fn delete_card(&self, card_id: Uuid) -> DbErrorResult<CardsChange> {
        let column_id = self.find_card(card_id).await?.column_id;
        let scope = Scope::ColumnCards(column_id);
        let _guard = self.locks.acquire(&[scope]).await?;

        let change = self
            .retrying("delete_card", move || async move {
                let mut tx = self.pool.begin().await?;

                let card = Self::locked_card(&mut tx, card_id, column_id).await?;
                CardRepository::delete(&mut *tx, card_id).await?;
                if !card.archived {
                    PositionIndex::close_gap(&mut tx, scope, card.position).await?;
                }

                let cards = CardRepository::find_live_by_column(&mut *tx, card.column_id).await?;
                tx.commit().await?;

                Ok(CardsChange { card, cards })
            })
            .await?;

        info!("Deleted card {} from column {}", card_id, column_id);
        Ok(change)
    }

    /// Set every live card's position from an explicit ordering of the column.
    pub async fn reorder_cards(&self, column_id: Uuid, card_ids: &[Uuid]) -> DbErrorResult<Vec<Card>> {
        let scope = Scope::ColumnCards(column_id);
        let _guard = self.locks.acquire(&[scope]).await?;

        self.retrying("reorder_cards", move || async move {
            let mut tx = self.pool.begin().await?;
            PositionIndex::reorder(&mut tx, scope, card_ids).await?;
            let cards = CardRepository::find_live_by_column(&mut *tx, column_id).await?;
            tx.commit().await?;
            Ok(cards)
        })
        .await
    }

    /// Re-read a card under its column lock, failing if it changed column since the lock was chosen.
    async fn locked_card(
        conn: &mut SqliteConnection,
        card_id: Uuid,
        expected_column_id: Uuid,
    ) -> DbErrorResult<Card> {
        let card = CardRepository::find_by_id(&mut *conn, card_id)
            .await?
            .ok_or_else(|| DbError::not_found("Card", card_id))?;

        if card.column_id != expected_column_id {
            return Err(DbError::conflict(format!(
                "card {card_id} moved to another column concurrently"
            )));
        }
        Ok(card)
    }
}
