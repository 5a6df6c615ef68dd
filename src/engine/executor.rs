//! Execution and outcome classification of a single request.
use reqwest::{Client, Method};
use tokio::time::Instant;
use tracing::debug;

use crate::args::HttpMethod;
use crate::config::TestConfig;

use super::aggregator::{Aggregator, RequestOutcome};

/// Statuses that classify an outcome as successful.
const SUCCESS_STATUSES: [u16; 2] = [200, 204];

/// Issues one HTTP request and reports exactly one outcome to the
/// aggregator. Failures never propagate past this boundary.
pub(super) async fn execute(config: &TestConfig, client: &Client, aggregator: &Aggregator) {
    let outcome = send_one(config, client).await;
    aggregator.record(outcome);
}

/// Latency is measured from dispatch until the response headers arrive;
/// body download time is excluded so large responses do not skew the
/// distribution. A response with a non-success status still yields a
/// latency sample; a timeout or transport error yields none.
async fn send_one(config: &TestConfig, client: &Client) -> RequestOutcome {
    let request = match config.method {
        HttpMethod::Get => client.get(config.address.clone()),
        HttpMethod::Head => client.head(config.address.clone()),
        HttpMethod::Options => client.request(Method::OPTIONS, config.address.clone()),
    };

    let start = Instant::now();
    match request.timeout(config.effective_timeout()).send().await {
        Ok(response) => {
            let latency = start.elapsed();
            let status = response.status().as_u16();
            let succeeded = SUCCESS_STATUSES.contains(&status);
            if !succeeded {
                debug!("Request completed with status {}", status);
            }
            RequestOutcome::completed(latency, succeeded)
        }
        Err(err) => {
            debug!("Request failed: {}", err);
            RequestOutcome::failed()
        }
    }
}
