use crate::{BoardDto, ColumnWithCardsDto};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BoardDetailResponse {
    pub board: BoardDto,
    /// The caller's resolved role on this board
    pub role: String,
    pub columns: Vec<ColumnWithCardsDto>,
}
