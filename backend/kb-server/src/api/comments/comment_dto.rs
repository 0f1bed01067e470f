use kb_core::Comment;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommentDto {
    pub id: String,
    pub card_id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Comment> for CommentDto {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id.to_string(),
            card_id: c.card_id.to_string(),
            author_id: c.author_id.to_string(),
            content: c.content,
            created_at: c.created_at.timestamp(),
            updated_at: c.updated_at.timestamp(),
        }
    }
}
