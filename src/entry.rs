use std::path::Path;

use clap::Parser;
use reqwest::Client;
use tracing::info;

use crate::args::TesterArgs;
use crate::config::TestConfig;
use crate::engine::{RunResult, Scheduler};
use crate::error::AppResult;
use crate::{logger, report, sinks};

pub(crate) fn run() -> AppResult<()> {
    let args = TesterArgs::parse();
    logger::init_logging(args.verbose);

    let config = TestConfig::try_from(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run_test(config))?;

    if !args.quiet {
        report::print_summary(&result);
    }
    if let Some(path) = args.output.as_deref() {
        sinks::write_json(Path::new(path), &result)?;
        info!("Result record written to {}", path);
    }

    Ok(())
}

async fn run_test(config: TestConfig) -> AppResult<RunResult> {
    info!(
        "Testing {} for {}s ({})",
        config.address,
        config.duration.as_secs(),
        config.rate_limit.map_or_else(
            || "random-jitter dispatch".to_owned(),
            |rate| format!("{} requests per second", rate),
        ),
    );
    // One shared client so executors reuse connections.
    let client = Client::builder().build()?;
    Ok(Scheduler::new(config, client).run().await)
}
