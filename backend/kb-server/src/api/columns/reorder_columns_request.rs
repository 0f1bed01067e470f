use serde::Deserialize;

/// Every column of the board, in the desired order.
#[derive(Debug, Deserialize)]
pub struct ReorderColumnsRequest {
    pub column_ids: Vec<String>,
}
