mod error;
mod extractors;
mod requests;
