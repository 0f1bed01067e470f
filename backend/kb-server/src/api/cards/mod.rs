pub mod card_delete_response;
pub mod card_dto;
pub mod card_list_response;
pub mod card_move_response;
pub mod card_response;
#[allow(clippy::module_inception)]
pub mod cards;
pub mod cards_change_response;
pub mod create_card_request;
pub mod due_date;
pub mod move_card_request;
pub mod reorder_cards_request;
pub mod update_card_request;
