use crate::ColumnDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ColumnDeleteResponse {
    pub deleted_id: String,
    pub cards_removed: u64,
    /// Remaining columns, compacted
    pub columns: Vec<ColumnDto>,
}
