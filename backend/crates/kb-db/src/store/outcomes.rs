//! Post-mutation state returned by store operations.

use kb_core::{Board, Card, Column};

use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ColumnWithCards {
    pub column: Column,
    /// Live cards in position order
    pub cards: Vec<Card>,
}

/// A settings update and the fields whose value actually changed.
#[derive(Debug, Clone)]
pub struct BoardUpdate {
    pub board: Board,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct BoardArchival {
    pub board: Board,
    /// False when the board already had the requested flag
    pub changed: bool,
}

#[derive(Debug, Clone)]
pub struct BoardDetail {
    pub board: Board,
    pub columns: Vec<ColumnWithCards>,
}

/// A column mutation together with the board's columns after it.
#[derive(Debug, Clone)]
pub struct ColumnsChange {
    pub column: Column,
    /// Metadata fields whose value changed
    pub fields: Vec<String>,
    /// Set when the column changed position
    pub moved_from: Option<i32>,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone)]
pub struct ColumnDeletion {
    pub column: Column,
    /// Live and archived cards removed with the column
    pub cards_removed: u64,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone)]
pub struct CardUpdate {
    pub card: Card,
    /// Empty when every given value matched the stored one
    pub fields: Vec<String>,
}

/// A card mutation together with the live cards of its column after it.
#[derive(Debug, Clone)]
pub struct CardsChange {
    pub card: Card,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone)]
pub struct CardMove {
    pub card: Card,
    pub from_column_id: Uuid,
    pub from_position: i32,
    /// False when the card was already at the requested place
    pub moved: bool,
    pub source_cards: Vec<Card>,
    /// Equal to `source_cards` for a move within one column
    pub target_cards: Vec<Card>,
}
