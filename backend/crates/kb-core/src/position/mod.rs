//! Dense positional ordering of sibling records.
//!
//! A scope (the columns of one board, or the live cards of one column) keeps
//! its positions as exactly `0..N`. Every mutation is expressed as at most one
//! contiguous [`Shift`] plus a direct write of the moved record, so the storage
//! layer can apply it as a single ranged `UPDATE`.

pub mod plan;
pub mod scope;
pub mod shift;

pub use plan::{InsertPlan, is_dense, plan_insert, plan_move, plan_remove, plan_reorder};
