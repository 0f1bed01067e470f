use crate::{Column, Priority};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,

    // Placement
    pub column_id: Uuid,
    /// Denormalized from the column; fixed at creation
    pub board_id: Uuid,
    /// Dense among the column's live cards. Archived cards keep a stale value.
    pub position: i32,

    // Core fields
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
    pub assignee_id: Option<Uuid>,
    pub labels: Vec<String>,
    pub archived: bool,

    // Audit
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// New live card in `column`. The board id is taken from the column so the
    /// two can never disagree.
    pub fn new(column: &Column, title: String, position: i32, created_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            column_id: column.id,
            board_id: column.board_id,
            position,
            title,
            description: None,
            priority: Priority::default(),
            due_date: None,
            assignee_id: None,
            labels: Vec::new(),
            archived: false,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }
}
