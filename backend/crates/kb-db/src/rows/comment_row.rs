use crate::DbError;
use crate::rows::decode;

use kb_core::Comment;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CommentRow {
    id: String,
    card_id: String,
    author_id: String,
    content: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DbError;

    fn try_from(r: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: decode::uuid(&r.id, "comment.id")?,
            card_id: decode::uuid(&r.card_id, "comment.card_id")?,
            author_id: decode::uuid(&r.author_id, "comment.author_id")?,
            content: r.content,
            created_at: decode::timestamp(r.created_at, "comment.created_at")?,
            updated_at: decode::timestamp(r.updated_at, "comment.updated_at")?,
        })
    }
}
