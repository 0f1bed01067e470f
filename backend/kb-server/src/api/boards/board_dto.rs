use kb_core::Board;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BoardDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub kind: String,
    pub team_id: Option<String>,
    pub owner_id: String,
    pub archived: bool,
    pub background_color: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Board> for BoardDto {
    fn from(b: Board) -> Self {
        Self {
            id: b.id.to_string(),
            name: b.name,
            description: b.description,
            kind: b.kind.as_str().to_string(),
            team_id: b.team_id.map(|id| id.to_string()),
            owner_id: b.owner_id.to_string(),
            archived: b.archived,
            background_color: b.background_color,
            created_at: b.created_at.timestamp(),
            updated_at: b.updated_at.timestamp(),
        }
    }
}
