use kb_core::Card;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CardDto {
    pub id: String,
    pub column_id: String,
    pub board_id: String,
    pub position: i32,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    /// Unix seconds
    pub due_date: Option<i64>,
    pub assignee_id: Option<String>,
    pub labels: Vec<String>,
    pub archived: bool,
    pub created_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Card> for CardDto {
    fn from(c: Card) -> Self {
        Self {
            id: c.id.to_string(),
            column_id: c.column_id.to_string(),
            board_id: c.board_id.to_string(),
            position: c.position,
            title: c.title,
            description: c.description,
            priority: c.priority.as_str().to_string(),
            due_date: c.due_date.map(|d| d.timestamp()),
            assignee_id: c.assignee_id.map(|id| id.to_string()),
            labels: c.labels,
            archived: c.archived,
            created_by: c.created_by.to_string(),
            created_at: c.created_at.timestamp(),
            updated_at: c.updated_at.timestamp(),
        }
    }
}
