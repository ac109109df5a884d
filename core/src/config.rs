//! Client configuration.
//!
//! The base URL is owned by whoever wires the client together, not by the
//! client itself. `ZooConfig::from_env` reads it from `ZOO_BASE_URL`, with
//! `ZOO_TIMEOUT_MS` bounding each request made by the network transport.

use std::time::Duration;

use crate::error::ConfigError;

pub const BASE_URL_VAR: &str = "ZOO_BASE_URL";
pub const TIMEOUT_VAR: &str = "ZOO_TIMEOUT_MS";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZooConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ZooConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ZooConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing or blank keys
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().to_string();
        }
        if let Some(raw) = lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            let millis: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidTimeout {
                key: TIMEOUT_VAR,
                value: raw.clone(),
            })?;
            config.timeout = Duration::from_millis(millis);
        }
        Ok(config)
    }
}
