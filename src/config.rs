//! Validated run configuration.
use std::time::Duration;

use url::Url;

use crate::args::{HttpMethod, TesterArgs};
use crate::error::ConfigError;

/// Immutable configuration for one load-test run, validated on construction.
///
/// A zero duration is accepted and produces an empty run: the scheduler
/// dispatches nothing and the result carries empty aggregates.
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub address: Url,
    pub duration: Duration,
    pub method: HttpMethod,
    pub timeout: Option<Duration>,
    pub rate_limit: Option<u32>,
}

impl TestConfig {
    /// Validates and builds a run configuration.
    ///
    /// A rate limit of zero means "unlimited" and is normalized to unset,
    /// selecting random-jitter dispatch.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the address is empty, is not a
    /// well-formed URL, uses a scheme other than http/https, or has no host.
    pub fn new(
        address: &str,
        duration_secs: u64,
        method: HttpMethod,
        timeout_secs: Option<u64>,
        rate_limit: Option<u32>,
    ) -> Result<Self, ConfigError> {
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::AddressEmpty);
        }
        let parsed = Url::parse(trimmed).map_err(|err| ConfigError::InvalidAddress {
            value: trimmed.to_owned(),
            source: err,
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigError::UnsupportedScheme {
                    scheme: scheme.to_owned(),
                });
            }
        }
        if parsed.host_str().is_none() {
            return Err(ConfigError::MissingHost {
                value: trimmed.to_owned(),
            });
        }

        Ok(Self {
            address: parsed,
            duration: Duration::from_secs(duration_secs),
            method,
            timeout: timeout_secs.map(Duration::from_secs),
            rate_limit: rate_limit.filter(|rate| *rate > 0),
        })
    }

    /// Per-request timeout; defaults to one second past the run duration so
    /// a request dispatched at the deadline can still complete.
    #[must_use]
    pub const fn effective_timeout(&self) -> Duration {
        match self.timeout {
            Some(timeout) => timeout,
            None => self.duration.saturating_add(Duration::from_secs(1)),
        }
    }
}

impl TryFrom<&TesterArgs> for TestConfig {
    type Error = ConfigError;

    fn try_from(args: &TesterArgs) -> Result<Self, Self::Error> {
        Self::new(
            &args.address,
            args.duration,
            args.method,
            args.timeout,
            args.rate_limit,
        )
    }
}
