use crate::DEFAULT_COLUMN_COLOR;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: Uuid,
    pub board_id: Uuid,

    pub name: String,
    /// Dense 0-based index among the board's columns
    pub position: i32,

    /// Informational work-in-progress limit
    pub wip_limit: Option<i32>,
    pub color: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Column {
    pub fn new(board_id: Uuid, name: String, position: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            board_id,
            name,
            position,
            wip_limit: None,
            color: DEFAULT_COLUMN_COLOR.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
