use thiserror::Error;

use super::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
    #[error("HTTP client error: {source}")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type AppResult<T> = Result<T, AppError>;
