pub mod activity;
pub mod activity_kind;
pub mod board;
pub mod board_kind;
pub mod board_member;
pub mod card;
pub mod column;
pub mod comment;
pub mod permission;
pub mod priority;
pub mod role;
