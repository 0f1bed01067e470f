pub mod activity_repository;
pub mod board_member_repository;
pub mod board_repository;
pub mod card_repository;
pub mod column_repository;
pub mod comment_repository;
