//! Raw SQLite rows and their conversion into domain types.
//!
//! Ids are stored as TEXT, timestamps as unix seconds, labels as a JSON array.

pub(crate) mod board_member_row;
pub(crate) mod board_row;
pub(crate) mod card_row;
pub(crate) mod column_row;
pub(crate) mod comment_row;
pub(crate) mod decode;
