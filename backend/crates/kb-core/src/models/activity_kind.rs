//! Typed activity payloads.
//!
//! Each variant carries only the facts its consumer needs. The payload is
//! serialized with an internal `type` tag so readers can dispatch on it
//! without knowing every variant.

use crate::{Priority, Role};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivityKind {
    BoardCreated {
        name: String,
        from_template: bool,
    },
    BoardUpdated {
        fields: Vec<String>,
    },
    BoardArchived {
        archived: bool,
    },
    MemberAdded {
        user_id: Uuid,
        role: Role,
    },
    MemberRoleChanged {
        user_id: Uuid,
        from: Role,
        to: Role,
    },
    MemberRemoved {
        user_id: Uuid,
    },
    ColumnCreated {
        column_id: Uuid,
        name: String,
        position: i32,
    },
    ColumnUpdated {
        column_id: Uuid,
        fields: Vec<String>,
    },
    ColumnMoved {
        column_id: Uuid,
        from: i32,
        to: i32,
    },
    ColumnDeleted {
        column_id: Uuid,
        name: String,
        cards_removed: u64,
    },
    ColumnsReordered {
        column_ids: Vec<Uuid>,
    },
    CardCreated {
        title: String,
        column_id: Uuid,
        position: i32,
        priority: Priority,
    },
    CardUpdated {
        fields: Vec<String>,
    },
    CardMoved {
        from_column_id: Uuid,
        from_position: i32,
        to_column_id: Uuid,
        to_position: i32,
    },
    CardArchived {
        archived: bool,
    },
    CardDeleted {
        title: String,
    },
    CardsReordered {
        column_id: Uuid,
        card_ids: Vec<Uuid>,
    },
    CommentAdded {
        comment_id: Uuid,
    },
    CommentDeleted {
        comment_id: Uuid,
    },
}

impl ActivityKind {
    /// Stable tag stored alongside the JSON payload for indexing.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::BoardCreated { .. } => "board_created",
            Self::BoardUpdated { .. } => "board_updated",
            Self::BoardArchived { .. } => "board_archived",
            Self::MemberAdded { .. } => "member_added",
            Self::MemberRoleChanged { .. } => "member_role_changed",
            Self::MemberRemoved { .. } => "member_removed",
            Self::ColumnCreated { .. } => "column_created",
            Self::ColumnUpdated { .. } => "column_updated",
            Self::ColumnMoved { .. } => "column_moved",
            Self::ColumnDeleted { .. } => "column_deleted",
            Self::ColumnsReordered { .. } => "columns_reordered",
            Self::CardCreated { .. } => "card_created",
            Self::CardUpdated { .. } => "card_updated",
            Self::CardMoved { .. } => "card_moved",
            Self::CardArchived { .. } => "card_archived",
            Self::CardDeleted { .. } => "card_deleted",
            Self::CardsReordered { .. } => "cards_reordered",
            Self::CommentAdded { .. } => "comment_added",
            Self::CommentDeleted { .. } => "comment_deleted",
        }
    }
}
