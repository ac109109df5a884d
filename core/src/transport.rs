//! The transport seam between `ZooClient` and the network.
//!
//! # Design
//! `ZooClient` only ever sees `dyn Transport`, obtained from a
//! `TransportFactory` when the client is built. Swapping the factory swaps
//! the whole I/O layer: `UreqTransportFactory` talks to a real server,
//! `ScriptedTransportFactory` (see `scripted`) replays canned results.
//!
//! A transport makes exactly one attempt per `get`. Retries and timeouts are
//! the transport's business, never the client's.

use std::time::Duration;

use crate::config::DEFAULT_TIMEOUT;
use crate::error::TransportError;
use crate::http::{FetchResult, HttpResponse};

/// Performs a single HTTP GET.
#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    /// GET `url` (absolute). Any status code is a successful fetch; only
    /// failures below HTTP are reported as `Err`.
    fn get(&self, url: &str) -> FetchResult;
}

/// Creates the `Transport` a `ZooClient` will own.
#[cfg_attr(test, mockall::automock)]
pub trait TransportFactory {
    fn create(&self) -> Box<dyn Transport>;
}

/// Network-backed transport built on a blocking `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        // 4xx/5xx come back as data so the client sees the body.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> FetchResult {
        let mut response = self.agent.get(url).call().map_err(map_ureq_error)?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_vec().map_err(map_ureq_error)?;
        Ok(HttpResponse { status, body })
    }
}

fn map_ureq_error(err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::Timeout(_) => TransportError::Timeout(err.to_string()),
        ureq::Error::Io(_) => TransportError::Io(err.to_string()),
        other => TransportError::Connection(other.to_string()),
    }
}

/// Hands out a fresh `UreqTransport` on every `create`.
#[derive(Debug, Clone)]
pub struct UreqTransportFactory {
    timeout: Duration,
}

impl UreqTransportFactory {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for UreqTransportFactory {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl TransportFactory for UreqTransportFactory {
    fn create(&self) -> Box<dyn Transport> {
        Box::new(UreqTransport::new(self.timeout))
    }
}
