use crate::DbError;
use crate::rows::decode;

use kb_core::{Card, Priority};

use std::panic::Location;

use error_location::ErrorLocation;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CardRow {
    id: String,
    column_id: String,
    board_id: String,
    position: i64,
    title: String,
    description: Option<String>,
    priority: String,
    due_date: Option<i64>,
    assignee_id: Option<String>,
    labels: String,
    archived: bool,
    created_by: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<CardRow> for Card {
    type Error = DbError;

    fn try_from(r: CardRow) -> Result<Self, Self::Error> {
        let labels: Vec<String> =
            serde_json::from_str(&r.labels).map_err(|e| DbError::Initialization {
                message: format!("Invalid JSON in card.labels: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Card {
            id: decode::uuid(&r.id, "card.id")?,
            column_id: decode::uuid(&r.column_id, "card.column_id")?,
            board_id: decode::uuid(&r.board_id, "card.board_id")?,
            position: decode::int(r.position, "card.position")?,
            title: r.title,
            description: r.description,
            priority: decode::parsed::<Priority>(&r.priority, "card.priority")?,
            due_date: r
                .due_date
                .map(|ts| decode::timestamp(ts, "card.due_date"))
                .transpose()?,
            assignee_id: decode::optional_uuid(r.assignee_id.as_deref(), "card.assignee_id")?,
            labels,
            archived: r.archived,
            created_by: decode::uuid(&r.created_by, "card.created_by")?,
            created_at: decode::timestamp(r.created_at, "card.created_at")?,
            updated_at: decode::timestamp(r.updated_at, "card.updated_at")?,
        })
    }
}
