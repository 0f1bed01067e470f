mod models;
mod position;
