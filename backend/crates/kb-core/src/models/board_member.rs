use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Explicit role grant on a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardMember {
    pub id: Uuid,
    pub board_id: Uuid,
    pub user_id: Uuid,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl BoardMember {
    pub fn new(board_id: Uuid, user_id: Uuid, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            board_id,
            user_id,
            role,
            created_at: Utc::now(),
        }
    }
}
