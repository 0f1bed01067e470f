pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    boards::{
        archive_request::ArchiveRequest,
        board_detail_response::BoardDetailResponse,
        board_dto::BoardDto,
        board_list_response::BoardListResponse,
        board_response::BoardResponse,
        boards::{archive_board, create_board, delete_board, get_board, list_boards, update_board},
        column_with_cards_dto::ColumnWithCardsDto,
        create_board_request::{CreateBoardRequest, TemplateCardRequest, TemplateColumnRequest},
        list_boards_query::ListBoardsQuery,
        update_board_request::UpdateBoardRequest,
    },
    cards::{
        card_delete_response::CardDeleteResponse,
        card_dto::CardDto,
        card_list_response::CardListResponse,
        card_move_response::CardMoveResponse,
        card_response::CardResponse,
        cards::{
            archive_card, create_card, delete_card, get_card, move_card, reorder_cards,
            update_card,
        },
        cards_change_response::CardsChangeResponse,
        create_card_request::CreateCardRequest,
        move_card_request::MoveCardRequest,
        reorder_cards_request::ReorderCardsRequest,
        update_card_request::UpdateCardRequest,
    },
    columns::{
        column_delete_response::ColumnDeleteResponse,
        column_dto::ColumnDto,
        column_list_response::ColumnListResponse,
        columns::{create_column, delete_column, reorder_columns, update_column},
        columns_response::ColumnsResponse,
        create_column_request::CreateColumnRequest,
        reorder_columns_request::ReorderColumnsRequest,
        update_column_request::UpdateColumnRequest,
    },
    comments::{
        comment_dto::CommentDto,
        comment_list_response::CommentListResponse,
        comment_response::CommentResponse,
        comments::{add_comment, delete_comment, list_comments},
        create_comment_request::CreateCommentRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller_id::{CALLER_ID_HEADER, CallerId},
    members::{
        add_member_request::AddMemberRequest,
        change_role_request::ChangeRoleRequest,
        member_dto::MemberDto,
        member_list_response::MemberListResponse,
        member_response::MemberResponse,
        members::{add_member, change_member_role, list_members, remove_member},
    },
};

pub use crate::app_state::AppState;
pub use crate::error::{Result as ServerErrorResult, ServerError};
pub use crate::metrics::Metrics;
pub use crate::routes::build_router;
