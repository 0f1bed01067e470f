use crate::ColumnDto;

use serde::Serialize;

/// The affected column plus every column of its board in position order.
#[derive(Debug, Serialize)]
pub struct ColumnsResponse {
    pub column: ColumnDto,
    pub columns: Vec<ColumnDto>,
}
