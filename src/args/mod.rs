//! CLI argument types.
mod cli;
mod types;


pub use cli::TesterArgs;
pub use types::HttpMethod;
