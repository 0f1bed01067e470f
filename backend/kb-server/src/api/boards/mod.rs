pub mod archive_request;
pub mod board_detail_response;
pub mod board_dto;
pub mod board_list_response;
pub mod board_response;
#[allow(clippy::module_inception)]
pub mod boards;
pub mod column_with_cards_dto;
pub mod create_board_request;
pub mod list_boards_query;
pub mod update_board_request;
