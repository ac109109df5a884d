//! Error types for the zoo client.
//!
//! # Design
//! Every way a GET can fail below HTTP (refused connection, DNS, timeout,
//! broken body stream) collapses into `TransportError`. The client never
//! surfaces it; the variants exist for logging and for transports that want
//! to report what went wrong. `ConfigError` is only produced while loading
//! `ZooConfig` from the environment.

/// A GET that did not produce an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The connection could not be established (refused, DNS, TLS).
    #[error("connection error: {0}")]
    Connection(String),

    /// The request exceeded the transport's timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Reading or writing the stream failed mid-request.
    #[error("i/o error: {0}")]
    Io(String),
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a number of milliseconds, got {value:?}")]
    InvalidTimeout { key: &'static str, value: String },
}
