pub mod caller_id;
