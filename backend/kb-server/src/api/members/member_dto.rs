use kb_core::BoardMember;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MemberDto {
    pub id: String,
    pub board_id: String,
    pub user_id: String,
    pub role: String,
    pub created_at: i64,
}

impl From<BoardMember> for MemberDto {
    fn from(m: BoardMember) -> Self {
        Self {
            id: m.id.to_string(),
            board_id: m.board_id.to_string(),
            user_id: m.user_id.to_string(),
            role: m.role.as_str().to_string(),
            created_at: m.created_at.timestamp(),
        }
    }
}
