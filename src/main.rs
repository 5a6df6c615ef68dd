mod args;
mod config;
mod engine;
mod entry;
mod error;
mod logger;
mod report;
mod sinks;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
