mod app;
mod config;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
