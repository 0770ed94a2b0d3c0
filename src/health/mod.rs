//! Best-effort reachability checks for locally hosted endpoints.
//!
//! A probe only informs the user; it never gates configuration and never returns an error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

/// Default upper bound for a single probe request.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(2_000);

const API_VERSION_SUFFIX: &str = "/v1";
const STATUS_PATH: &str = "/api/tags";

/// Builds the status URL for a provider base URL.
///
/// A trailing `/v1` (with or without a final slash) is stripped before the status path
/// is appended. The input is not otherwise validated.
pub fn health_check_url(base_url: &str) -> String {
    let root = base_url
        .strip_suffix("/v1/")
        .or_else(|| base_url.strip_suffix(API_VERSION_SUFFIX))
        .unwrap_or(base_url);
    format!("{root}{STATUS_PATH}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered, whatever the status code.
    Reachable { status: u16 },
    /// Connection refused, DNS failure, timeout, malformed URL, ...
    Unreachable { reason: String },
}

impl ProbeOutcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable { .. })
    }
}

#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeOutcome;
}

/// `HEAD` request with a short timeout.
///
/// Any HTTP response counts as reachable, including 404/405/5xx: a server that answers
/// at all is taken to be present.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
    timeout: Duration,
}

impl Default for HttpProbe {
    fn default() -> Self {
        Self::with_client(Client::new())
    }
}

impl HttpProbe {
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl ReachabilityProbe for HttpProbe {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        log::debug!("probing {url} (timeout {:?})", self.timeout);
        match self.client.head(url).timeout(self.timeout).send().await {
            Ok(resp) => {
                let status = resp.status().as_u16();
                log::debug!("probe {url} answered with status {status}");
                ProbeOutcome::Reachable { status }
            }
            Err(err) => {
                log::debug!("probe {url} failed: {err}");
                ProbeOutcome::Unreachable {
                    reason: err.to_string(),
                }
            }
        }
    }
}
