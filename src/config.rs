//! Client configuration.
//!
//! Every URL and timing constant the client uses lives in
//! [`ClientConfig`], passed in at construction. There are no
//! module-level singletons, so independent client instances (e.g. in
//! tests) never share state.
//!
//! [`fetch_config`] builds a config from the environment:
//! - `TAPE_API_BASE` overrides the REST base URL
//! - `TAPE_WS_URL` overrides the tick stream endpoint
//!
//! Empty variables are treated as absent.

use std::time::Duration;

/// Default REST base URL of the dashboard backend.
const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Default tick stream endpoint.
const DEFAULT_WS_URL: &str = "ws://localhost:8000/ws/ticks";

/// Delay before an automatic reconnect attempt after a stream drop.
const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_secs(3);

/// Interval between REST fallback polls while the stream is down.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Timeout applied to every REST request.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How concurrent tick snapshots are reconciled in the store.
///
/// The original feed applies whichever snapshot arrives last, which
/// means an out-of-order delivery can overwrite fresher data.
/// `TimestampWins` closes that hole by rejecting snapshots whose
/// timestamp is older than the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderingPolicy {
    /// The most recently *arrived* snapshot always wins.
    #[default]
    ArrivalOrder,
    /// A snapshot older (by its own timestamp) than the stored data is
    /// dropped. Snapshots without a parseable timestamp are applied.
    TimestampWins,
}

/// Top-level client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST base URL, e.g. `http://localhost:8000`.
    pub api_base: String,
    /// Tick stream endpoint, e.g. `ws://localhost:8000/ws/ticks`.
    pub ws_url: String,
    /// Delay before an automatic stream reconnect attempt.
    pub reconnect_delay: Duration,
    /// Interval between fallback snapshot polls.
    pub poll_interval: Duration,
    /// Per-request timeout for the REST client.
    pub request_timeout: Duration,
    /// Snapshot reconciliation policy for the tick store.
    pub ordering: OrderingPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            ws_url: DEFAULT_WS_URL.to_string(),
            reconnect_delay: DEFAULT_RECONNECT_DELAY,
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            ordering: OrderingPolicy::ArrivalOrder,
        }
    }
}

impl ClientConfig {
    /// Checks the config for values the client cannot operate with.
    ///
    /// # Errors
    ///
    /// Returns [`TapeError::Config`](crate::TapeError::Config) if a URL
    /// has the wrong scheme or a timing value is zero.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(crate::TapeError::Config(format!(
                "api_base must be an http(s) URL, got {:?}",
                self.api_base
            )));
        }
        if !self.ws_url.starts_with("ws://") && !self.ws_url.starts_with("wss://") {
            return Err(crate::TapeError::Config(format!(
                "ws_url must be a ws(s) URL, got {:?}",
                self.ws_url
            )));
        }
        if self.poll_interval.is_zero() || self.reconnect_delay.is_zero() {
            return Err(crate::TapeError::Config(
                "poll_interval and reconnect_delay must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loads the client configuration from environment variables.
///
/// The REST base defaults to `http://localhost:8000` and the stream
/// endpoint to `ws://localhost:8000/ws/ticks`; `TAPE_API_BASE` and
/// `TAPE_WS_URL` override them. Timing constants keep their defaults.
///
/// # Errors
///
/// Returns [`TapeError::Config`](crate::TapeError::Config) if an
/// override has the wrong URL scheme.
pub fn fetch_config() -> crate::Result<ClientConfig> {
    let mut config = ClientConfig::default();

    if let Some(api_base) = non_empty_var("TAPE_API_BASE") {
        config.api_base = api_base;
    }
    if let Some(ws_url) = non_empty_var("TAPE_WS_URL") {
        config.ws_url = ws_url;
    }

    config.validate()?;
    Ok(config)
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
