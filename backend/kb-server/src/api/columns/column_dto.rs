use kb_core::Column;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ColumnDto {
    pub id: String,
    pub board_id: String,
    pub name: String,
    pub position: i32,
    pub wip_limit: Option<i32>,
    pub color: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Column> for ColumnDto {
    fn from(c: Column) -> Self {
        Self {
            id: c.id.to_string(),
            board_id: c.board_id.to_string(),
            name: c.name,
            position: c.position,
            wip_limit: c.wip_limit,
            color: c.color,
            created_at: c.created_at.timestamp(),
            updated_at: c.updated_at.timestamp(),
        }
    }
}
