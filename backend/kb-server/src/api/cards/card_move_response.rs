use crate::CardDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CardMoveResponse {
    pub card: CardDto,
    pub source_cards: Vec<CardDto>,
    pub target_cards: Vec<CardDto>,
}
