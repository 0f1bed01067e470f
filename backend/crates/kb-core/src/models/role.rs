//! Board roles and the permission predicates derived from them.

use crate::{CoreError, Permission, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a caller holds on a board, from most to least privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Owner,
    Editor,
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }

    pub fn allows(self, required: Permission) -> bool {
        matches!(
            (self, required),
            (Role::Owner, _)
                | (
                    Role::Editor,
                    Permission::View | Permission::Edit | Permission::ModifySettings
                )
                | (Role::Viewer, Permission::View)
        )
    }

    pub fn can_view(self) -> bool {
        self.allows(Permission::View)
    }

    /// Create, update, move and delete of columns, cards and card content.
    pub fn can_edit(self) -> bool {
        self.allows(Permission::Edit)
    }

    pub fn can_delete(self) -> bool {
        self.allows(Permission::DeleteBoard)
    }

    pub fn can_archive_board(self) -> bool {
        self.allows(Permission::ArchiveBoard)
    }

    pub fn can_manage_members(self) -> bool {
        self.allows(Permission::ManageMembers)
    }

    /// Name, description and color. Archiving is gated separately.
    pub fn can_modify_board_settings(self) -> bool {
        self.allows(Permission::ModifySettings)
    }

    /// Self-service deletion of comments and attachments: the board owner,
    /// or whoever wrote the record.
    pub fn can_delete_authored(self, author_id: Uuid, caller_id: Uuid) -> bool {
        self == Role::Owner || author_id == caller_id
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "owner" => Ok(Self::Owner),
            "editor" => Ok(Self::Editor),
            "viewer" => Ok(Self::Viewer),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
