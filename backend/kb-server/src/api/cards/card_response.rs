use crate::CardDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CardResponse {
    pub card: CardDto,
}
