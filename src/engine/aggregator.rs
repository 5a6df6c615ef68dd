//! Concurrent-safe accumulation of request outcomes and the final snapshot.
use std::sync::Mutex;
use std::time::Duration;

use serde::Serialize;

use crate::args::HttpMethod;
use crate::config::TestConfig;

/// The result of one dispatched request.
///
/// `latency` is present whenever a response was received, including
/// non-success statuses, and absent when the request never completed
/// (timeout or transport error).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOutcome {
    pub latency: Option<Duration>,
    pub succeeded: bool,
}

impl RequestOutcome {
    #[must_use]
    pub const fn completed(latency: Duration, succeeded: bool) -> Self {
        Self {
            latency: Some(latency),
            succeeded,
        }
    }

    #[must_use]
    pub const fn failed() -> Self {
        Self {
            latency: None,
            succeeded: false,
        }
    }
}

/// Mutable accumulator state. Invariants: `total_requests >= error_count`
/// and `latencies.len() <= total_requests`.
#[derive(Debug, Default)]
struct RunStats {
    total_requests: u64,
    error_count: u64,
    latencies: Vec<Duration>,
}

/// Serializes concurrent outcome writers behind one mutex so counters and
/// the latency list always advance as a unit.
///
/// Critical sections are short appends; no lock is ever held across an
/// await point.
#[derive(Debug, Default)]
pub struct Aggregator {
    stats: Mutex<RunStats>,
}

impl Aggregator {
    /// Records exactly one outcome. Called concurrently by every request
    /// executor.
    pub fn record(&self, outcome: RequestOutcome) {
        let mut stats = self
            .stats
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        stats.total_requests = stats.total_requests.saturating_add(1);
        if !outcome.succeeded {
            stats.error_count = stats.error_count.saturating_add(1);
        }
        if let Some(latency) = outcome.latency {
            stats.latencies.push(latency);
        }
    }

    /// Freezes the accumulated stats into a result snapshot. The scheduler
    /// only calls this after every dispatched executor has reported, so two
    /// snapshots of a finished run are identical.
    #[must_use]
    pub fn snapshot(&self, config: &TestConfig) -> RunResult {
        let stats = self
            .stats
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let summary = summarize(&stats.latencies);

        RunResult {
            address: config.address.as_str().to_owned(),
            http_method: config.method,
            duration: config.duration.as_secs(),
            rate_limit: config.rate_limit,
            timeout: config.timeout.map(|timeout| timeout.as_secs()),
            n_requests: stats.total_requests,
            n_failure: stats.error_count,
            n_success: stats.total_requests.saturating_sub(stats.error_count),
            min_latency: summary.min,
            max_latency: summary.max,
            avg_latency: summary.mean,
            std_latency: summary.std_dev,
            latencies: stats.latencies.clone(),
        }
    }
}

/// Latency aggregates in seconds. Every field is absent for an empty
/// multiset; `std_dev` additionally needs at least two samples.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatencySummary {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
}

/// Aggregates a latency multiset. Standard deviation uses the sample (n-1)
/// formula.
#[must_use]
pub fn summarize(latencies: &[Duration]) -> LatencySummary {
    if latencies.is_empty() {
        return LatencySummary::default();
    }

    let secs: Vec<f64> = latencies.iter().map(Duration::as_secs_f64).collect();
    let n = secs.len();
    let min = secs.iter().copied().fold(f64::INFINITY, f64::min);
    let max = secs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = secs.iter().sum::<f64>() / n as f64;
    let std_dev = if n >= 2 {
        let variance = secs
            .iter()
            .map(|sample| (sample - mean).powi(2))
            .sum::<f64>()
            / (n as f64 - 1.0);
        Some(variance.sqrt())
    } else {
        None
    };

    LatencySummary {
        min: Some(min),
        max: Some(max),
        mean: Some(mean),
        std_dev,
    }
}

/// Immutable snapshot handed to the reporting and persistence consumers.
///
/// The serialized record omits unset options and absent aggregates instead
/// of encoding them as errors. Latency values are seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub address: String,
    pub http_method: HttpMethod,
    pub duration: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    pub n_requests: u64,
    pub n_failure: u64,
    pub n_success: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_latency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_latency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_latency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_latency: Option<f64>,
    #[serde(skip)]
    pub latencies: Vec<Duration>,
}
