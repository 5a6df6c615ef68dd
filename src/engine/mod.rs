//! Request scheduling and result aggregation.
//!
//! The scheduler owns the control loop that decides when executors launch,
//! the executor turns one HTTP call into one outcome, and the aggregator
//! accumulates outcomes concurrently until the run freezes into a
//! [`RunResult`].
mod aggregator;
mod executor;
mod scheduler;


pub use aggregator::{Aggregator, LatencySummary, RequestOutcome, RunResult, summarize};
pub use scheduler::Scheduler;
