use crate::{CardDto, ColumnDto};

use kb_db::ColumnWithCards;

use serde::Serialize;

/// A column's fields with its live cards in position order
#[derive(Debug, Serialize)]
pub struct ColumnWithCardsDto {
    #[serde(flatten)]
    pub column: ColumnDto,
    pub cards: Vec<CardDto>,
}

impl From<ColumnWithCards> for ColumnWithCardsDto {
    fn from(c: ColumnWithCards) -> Self {
        Self {
            column: c.column.into(),
            cards: c.cards.into_iter().map(CardDto::from).collect(),
        }
    }
}
