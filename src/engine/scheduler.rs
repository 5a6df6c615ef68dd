//! The dispatch control loop.
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use reqwest::Client;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep};
use tracing::{debug, warn};

use crate::config::TestConfig;

use super::aggregator::{Aggregator, RunResult};
use super::executor;

/// Fixed-rate dispatch interval: one burst per tick.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchedulerState {
    Idle,
    Running,
    Draining,
    Done,
}

/// How request dispatch is paced, selected once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DispatchMode {
    /// One request per tick, then a uniformly random sleep in [0, 1) s.
    Jitter,
    /// A burst of N requests per tick, then a one-second sleep.
    FixedRate(u32),
}

/// A zero rate limit means "unlimited", same as leaving it unset.
pub(crate) const fn dispatch_mode(rate_limit: Option<u32>) -> DispatchMode {
    match rate_limit {
        None | Some(0) => DispatchMode::Jitter,
        Some(rate) => DispatchMode::FixedRate(rate),
    }
}

/// Owns the control loop of one run: dispatches request executors until the
/// configured duration elapses, then drains every in-flight task and
/// freezes the aggregate snapshot.
pub struct Scheduler {
    config: Arc<TestConfig>,
    client: Client,
    aggregator: Arc<Aggregator>,
    handles: Vec<JoinHandle<()>>,
    state: SchedulerState,
}

impl Scheduler {
    #[must_use]
    pub fn new(config: TestConfig, client: Client) -> Self {
        Self {
            config: Arc::new(config),
            client,
            aggregator: Arc::new(Aggregator::default()),
            handles: Vec::new(),
            state: SchedulerState::Idle,
        }
    }

    /// Runs the dispatch loop to completion and returns the final snapshot.
    ///
    /// Ticks keep launching until the elapsed wall-clock time reaches the
    /// configured duration; a tick that started before the deadline always
    /// dispatches its full burst. Once the deadline passes, no new request
    /// is launched and every in-flight one is awaited - requests are never
    /// cancelled or retried.
    pub async fn run(mut self) -> RunResult {
        let mode = dispatch_mode(self.config.rate_limit);
        self.transition(SchedulerState::Running);

        let start = Instant::now();
        while start.elapsed() < self.config.duration {
            match mode {
                DispatchMode::Jitter => {
                    self.dispatch();
                    let jitter = rand::thread_rng().gen_range(0.0..1.0);
                    sleep(Duration::from_secs_f64(jitter)).await;
                }
                DispatchMode::FixedRate(rate) => {
                    for _ in 0..rate {
                        self.dispatch();
                    }
                    sleep(TICK_INTERVAL).await;
                }
            }
        }

        self.transition(SchedulerState::Draining);
        for handle in std::mem::take(&mut self.handles) {
            if let Err(err) = handle.await {
                warn!("Request task failed to join: {}", err);
            }
        }

        self.transition(SchedulerState::Done);
        self.aggregator.snapshot(&self.config)
    }

    /// Fire-and-forget launch of one request executor, tracked for the
    /// draining join.
    fn dispatch(&mut self) {
        let config = Arc::clone(&self.config);
        let client = self.client.clone();
        let aggregator = Arc::clone(&self.aggregator);
        self.handles.push(tokio::spawn(async move {
            executor::execute(&config, &client, &aggregator).await;
        }));
    }

    fn transition(&mut self, next: SchedulerState) {
        debug!("Scheduler state: {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
