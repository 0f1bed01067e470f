use crate::{ActivityKind, CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only record of something that happened on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub board_id: Uuid,
    pub card_id: Option<Uuid>,
    pub actor_id: Option<Uuid>,
    pub kind: ActivityKind,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    pub fn new(
        board_id: Uuid,
        card_id: Option<Uuid>,
        actor_id: Option<Uuid>,
        kind: ActivityKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            board_id,
            card_id,
            actor_id,
            kind,
            created_at: Utc::now(),
        }
    }

    pub fn on_board(board_id: Uuid, actor_id: Uuid, kind: ActivityKind) -> Self {
        Self::new(board_id, None, Some(actor_id), kind)
    }

    pub fn on_card(board_id: Uuid, card_id: Uuid, actor_id: Uuid, kind: ActivityKind) -> Self {
        Self::new(board_id, Some(card_id), Some(actor_id), kind)
    }

    pub fn type_tag(&self) -> &'static str {
        self.kind.type_tag()
    }

    /// JSON payload as written to the activity sink.
    #[track_caller]
    pub fn metadata_json(&self) -> CoreErrorResult<String> {
        serde_json::to_string(&self.kind).map_err(|source| CoreError::ActivityMetadata {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
