//! Board entity - the top-level container for columns and cards.

use crate::{BoardKind, CoreError, DEFAULT_BOARD_COLOR, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub kind: BoardKind,
    /// Present iff `kind` is [`BoardKind::Team`]
    pub team_id: Option<Uuid>,
    /// Creator; always resolves to the owner role
    pub owner_id: Uuid,
    pub archived: bool,
    pub background_color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Create a board, rejecting a team reference that disagrees with `kind`.
    #[track_caller]
    pub fn new(
        name: String,
        kind: BoardKind,
        team_id: Option<Uuid>,
        owner_id: Uuid,
    ) -> CoreErrorResult<Self> {
        match (kind, team_id) {
            (BoardKind::Team, None) => {
                return Err(CoreError::Validation {
                    message: "team boards require a team_id".to_string(),
                    field: Some("team_id".to_string()),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            (BoardKind::Personal, Some(_)) => {
                return Err(CoreError::Validation {
                    message: "personal boards cannot reference a team".to_string(),
                    field: Some("team_id".to_string()),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            _ => {}
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description: None,
            kind,
            team_id,
            owner_id,
            archived: false,
            background_color: DEFAULT_BOARD_COLOR.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }
}
