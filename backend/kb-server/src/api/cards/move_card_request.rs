use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MoveCardRequest {
    /// Target column; may be the card's current column
    pub column_id: String,

    /// Zero-based index in the target column; appended when omitted
    #[serde(default)]
    pub position: Option<i32>,
}
