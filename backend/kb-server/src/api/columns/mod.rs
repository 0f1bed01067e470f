pub mod column_delete_response;
pub mod column_dto;
pub mod column_list_response;
#[allow(clippy::module_inception)]
pub mod columns;
pub mod columns_response;
pub mod create_column_request;
pub mod reorder_columns_request;
pub mod update_column_request;
