//! Client core for the zoo message service.
//!
//! # Overview
//! `ZooClient` turns an animal name into the greeting the zoo server returns
//! for it. All network access goes through the `Transport` trait, and the
//! client obtains its transport from a `TransportFactory` at construction, so
//! tests can swap in a scripted or mocked transport without touching the
//! client.
//!
//! # Design
//! - One GET per `read_message`, no retries, no caching.
//! - Any response body is passed through as text regardless of status code.
//! - Transport failures are swallowed into an empty string and logged.
//! - `UreqTransport` is the network-backed implementation;
//!   `ScriptedTransport` replays canned results.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod scripted;
pub mod transport;

pub use client::ZooClient;
pub use config::ZooConfig;
pub use error::{ConfigError, TransportError};
pub use http::{FetchResult, HttpResponse};
pub use scripted::{ScriptedTransport, ScriptedTransportFactory};
pub use transport::{Transport, TransportFactory, UreqTransport, UreqTransportFactory};
