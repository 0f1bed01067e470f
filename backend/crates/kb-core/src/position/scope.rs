use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sibling set over which a dense ordering is maintained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scope {
    /// All columns of a board
    BoardColumns(Uuid),
    /// All non-archived cards of a column
    ColumnCards(Uuid),
}

impl Scope {
    pub fn parent_id(&self) -> Uuid {
        match self {
            Self::BoardColumns(id) | Self::ColumnCards(id) => *id,
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BoardColumns(id) => write!(f, "columns of board {id}"),
            Self::ColumnCards(id) => write!(f, "cards of column {id}"),
        }
    }
}
