use crate::CardDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CardDeleteResponse {
    pub deleted_id: String,
    /// Live cards left in the column, compacted
    pub cards: Vec<CardDto>,
}
