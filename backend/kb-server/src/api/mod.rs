pub mod activity;
pub mod boards;
pub mod cards;
pub mod columns;
pub mod comments;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod ids;
pub mod members;
pub mod nullable;
