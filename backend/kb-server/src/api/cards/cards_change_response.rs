use crate::CardDto;

use serde::Serialize;

/// The affected card plus the live cards of its column in position order.
#[derive(Debug, Serialize)]
pub struct CardsChangeResponse {
    pub card: CardDto,
    pub cards: Vec<CardDto>,
}
