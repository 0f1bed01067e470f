use crate::repositories::board_member_repository::BoardMemberRepository;
use crate::{BoardStore, DbError, Result as DbErrorResult};

use kb_core::{BoardMember, Role};

use log::info;
use uuid::Uuid;

impl BoardStore {
    pub async fn list_members(&self, board_id: Uuid) -> DbErrorResult<Vec<BoardMember>> {
        BoardMemberRepository::find_by_board(&self.pool, board_id).await
    }

    /// Grant `role` to `user_id`. A user can hold at most one grant per board.
    pub async fn add_member(
        &self,
        board_id: Uuid,
        user_id: Uuid,
        role: Role,
    ) -> DbErrorResult<BoardMember> {
        let member = self
            .retrying("add_member", move || async move {
                let mut tx = self.pool.begin().await?;

                if BoardMemberRepository::find(&mut *tx, board_id, user_id)
                    .await?
                    .is_some()
                {
                    return Err(DbError::validation(
                        format!("{user_id} is already a member of this board"),
                        "user_id",
                    ));
                }

                let member = BoardMember::new(board_id, user_id, role);
                BoardMemberRepository::create(&mut *tx, &member).await?;
                tx.commit().await?;
                Ok(member)
            })
            .await?;

        info!("Added {} to board {} as {}", user_id, board_id, role);
        Ok(member)
    }

    /// Returns the updated grant and the role it replaced.
    pub async fn change_member_role(
        &self,
        board_id: Uuid,
        user_id: Uuid,
        role: Role,
    ) -> DbErrorResult<(BoardMember, Role)> {
        self.retrying("change_member_role", move || async move {
            let mut tx = self.pool.begin().await?;

            let mut member = BoardMemberRepository::find(&mut *tx, board_id, user_id)
                .await?
                .ok_or_else(|| DbError::not_found("Board member", user_id))?;
            let previous = member.role;

            if previous != role {
                BoardMemberRepository::update_role(&mut *tx, board_id, user_id, role).await?;
                member.role = role;
            }

            tx.commit().await?;
            Ok((member, previous))
        })
        .await
    }

    pub async fn remove_member(&self, board_id: Uuid, user_id: Uuid) -> DbErrorResult<()> {
        let removed = self
            .retrying("remove_member", move || async move {
                BoardMemberRepository::delete(&self.pool, board_id, user_id).await
            })
            .await?;

        if !removed {
            return Err(DbError::not_found("Board member", user_id));
        }

        info!("Removed {} from board {}", user_id, board_id);
        Ok(())
    }
}
