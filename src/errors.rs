// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error reading input: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected three whitespace-separated integers (H M S), found {found} token(s)")]
    TokenCount { found: usize },

    #[error("invalid integer token '{token}': {source}")]
    ParseInt {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
