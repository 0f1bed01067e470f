use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] kb_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] kb_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Metrics error: {message}")]
    Metrics { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
