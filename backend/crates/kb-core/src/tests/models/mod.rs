mod activity;
mod board;
mod role;
