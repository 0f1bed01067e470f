use crate::DbError;
use crate::rows::decode;

use kb_core::{BoardMember, Role};

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct BoardMemberRow {
    id: String,
    board_id: String,
    user_id: String,
    role: String,
    created_at: i64,
}

impl TryFrom<BoardMemberRow> for BoardMember {
    type Error = DbError;

    fn try_from(r: BoardMemberRow) -> Result<Self, Self::Error> {
        Ok(BoardMember {
            id: decode::uuid(&r.id, "board_member.id")?,
            board_id: decode::uuid(&r.board_id, "board_member.board_id")?,
            user_id: decode::uuid(&r.user_id, "board_member.user_id")?,
            role: decode::parsed::<Role>(&r.role, "board_member.role")?,
            created_at: decode::timestamp(r.created_at, "board_member.created_at")?,
        })
    }
}
