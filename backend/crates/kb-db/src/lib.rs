pub mod access_control;
pub mod activity_sink;
pub mod error;
pub mod position_index;
pub mod repositories;
pub mod retry;
pub mod scope_locks;
pub mod store;
pub mod team_directory;

pub(crate) mod rows;

pub use access_control::{AccessControl, Authorized};
pub use activity_sink::{ActivitySink, SqliteActivitySink};
pub use error::{DbError, Result};
pub use position_index::PositionIndex;
pub use repositories::activity_repository::ActivityRepository;
pub use repositories::board_member_repository::BoardMemberRepository;
pub use repositories::board_repository::{BoardFilter, BoardRepository};
pub use repositories::card_repository::CardRepository;
pub use repositories::column_repository::ColumnRepository;
pub use repositories::comment_repository::CommentRepository;
pub use retry::{IsRetryable, RetryPolicy, with_retry};
pub use scope_locks::{ScopeGuard, ScopeLocks};
pub use store::BoardStore;
pub use store::inputs::{
    BoardChanges, CardChanges, ColumnChanges, NewBoard, NewCard, NewColumn, TemplateCard,
    TemplateColumn,
};
pub use store::outcomes::{
    BoardArchival, BoardDetail, BoardUpdate, CardMove, CardUpdate, CardsChange, ColumnDeletion,
    ColumnWithCards, ColumnsChange,
};
pub use team_directory::{SqliteTeamDirectory, TeamDirectory};

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
