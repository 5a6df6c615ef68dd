use clap::Parser;

use super::types::HttpMethod;

/// Default test duration in seconds.
pub const DEFAULT_DURATION_SECS: u64 = 5;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP load tester - jittered or fixed-rate dispatch with per-request latency statistics."
)]
pub struct TesterArgs {
    /// Address to test
    pub address: String,

    /// Duration of the test (seconds)
    #[arg(long = "duration", short = 't', default_value_t = DEFAULT_DURATION_SECS)]
    pub duration: u64,

    /// HTTP method to use
    #[arg(long, short = 'X', default_value = "get", ignore_case = true)]
    pub method: HttpMethod,

    /// Per-request timeout (seconds); defaults to the test duration plus one
    #[arg(long = "timeout")]
    pub timeout: Option<u64>,

    /// Rate limit (queries per second); omit for random-jitter dispatch
    #[arg(long = "rate-limit", short = 'q', alias = "qps")]
    pub rate_limit: Option<u32>,

    /// Suppress the text summary
    #[arg(long)]
    pub quiet: bool,

    /// Write the result record to a JSON file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
