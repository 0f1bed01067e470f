pub mod error;
pub mod models;
pub mod position;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::activity::Activity;
pub use models::activity_kind::ActivityKind;
pub use models::board::Board;
pub use models::board_kind::BoardKind;
pub use models::board_member::BoardMember;
pub use models::card::Card;
pub use models::column::Column;
pub use models::comment::Comment;
pub use models::permission::Permission;
pub use models::priority::Priority;
pub use models::role::Role;
pub use position::scope::Scope;
pub use position::shift::Shift;

pub use error_location::ErrorLocation;

pub const DEFAULT_BOARD_COLOR: &str = "#0079bf";
pub const DEFAULT_COLUMN_COLOR: &str = "#e2e8f0";
