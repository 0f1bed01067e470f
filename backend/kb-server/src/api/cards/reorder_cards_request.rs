use serde::Deserialize;

/// Every live card of the column, in the desired order.
#[derive(Debug, Deserialize)]
pub struct ReorderCardsRequest {
    pub card_ids: Vec<String>,
}
