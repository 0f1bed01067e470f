use crate::DbError;
use crate::rows::decode;

use kb_core::{Board, BoardKind};

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct BoardRow {
    id: String,
    name: String,
    description: Option<String>,
    kind: String,
    team_id: Option<String>,
    owner_id: String,
    archived: bool,
    background_color: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<BoardRow> for Board {
    type Error = DbError;

    fn try_from(r: BoardRow) -> Result<Self, Self::Error> {
        Ok(Board {
            id: decode::uuid(&r.id, "board.id")?,
            name: r.name,
            description: r.description,
            kind: decode::parsed::<BoardKind>(&r.kind, "board.kind")?,
            team_id: decode::optional_uuid(r.team_id.as_deref(), "board.team_id")?,
            owner_id: decode::uuid(&r.owner_id, "board.owner_id")?,
            archived: r.archived,
            background_color: r.background_color,
            created_at: decode::timestamp(r.created_at, "board.created_at")?,
            updated_at: decode::timestamp(r.updated_at, "board.updated_at")?,
        })
    }
}
