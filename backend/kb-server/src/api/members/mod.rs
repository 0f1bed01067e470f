pub mod add_member_request;
pub mod change_role_request;
pub mod member_dto;
pub mod member_list_response;
pub mod member_response;
#[allow(clippy::module_inception)]
pub mod members;
