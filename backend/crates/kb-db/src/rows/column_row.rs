use crate::DbError;
use crate::rows::decode;

use kb_core::Column;

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ColumnRow {
    id: String,
    board_id: String,
    name: String,
    position: i64,
    wip_limit: Option<i64>,
    color: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ColumnRow> for Column {
    type Error = DbError;

    fn try_from(r: ColumnRow) -> Result<Self, Self::Error> {
        Ok(Column {
            id: decode::uuid(&r.id, "column.id")?,
            board_id: decode::uuid(&r.board_id, "column.board_id")?,
            name: r.name,
            position: decode::int(r.position, "column.position")?,
            wip_limit: r
                .wip_limit
                .map(|limit| decode::int(limit, "column.wip_limit"))
                .transpose()?,
            color: r.color,
            created_at: decode::timestamp(r.created_at, "column.created_at")?,
            updated_at: decode::timestamp(r.updated_at, "column.updated_at")?,
        })
    }
}
