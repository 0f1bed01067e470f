use crate::CardDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CardListResponse {
    pub cards: Vec<CardDto>,
}
