use crate::repositories::card_repository::CardRepository;
use crate::repositories::comment_repository::CommentRepository;
use crate::{BoardStore, DbError, Result as DbErrorResult};

use kb_core::Comment;

use uuid::Uuid;

impl BoardStore {
    /// Oldest first.
    pub async fn list_comments(&self, card_id: Uuid) -> DbErrorResult<Vec<Comment>> {
        CommentRepository::find_by_card(&self.pool, card_id).await
    }

    pub async fn add_comment(
        &self,
        card_id: Uuid,
        author_id: Uuid,
        content: &str,
    ) -> DbErrorResult<Comment> {
        self.retrying("add_comment", move || async move {
            let mut tx = self.pool.begin().await?;

            if CardRepository::find_by_id(&mut *tx, card_id).await?.is_none() {
                return Err(DbError::not_found("Card", card_id));
            }

            let comment = Comment::new(card_id, content.to_string(), author_id);
            CommentRepository::create(&mut *tx, &comment).await?;
            tx.commit().await?;
            Ok(comment)
        })
        .await
    }

    pub async fn delete_comment(&self, comment_id: Uuid) -> DbErrorResult<()> {
        let deleted = self
            .retrying("delete_comment", move || async move {
                CommentRepository::delete(&self.pool, comment_id).await
            })
            .await?;

        if !deleted {
            return Err(DbError::not_found("Comment", comment_id));
        }
        Ok(())
    }
}
