//! Plain-data shape of a transport round-trip.
//!
//! # Design
//! A fetch either produced a response (any status code, raw body bytes) or
//! failed at the transport level. `FetchResult` is a `Result` so the failure
//! case carries no status or body at all; the client cannot accidentally read
//! them when the transport failed.

use crate::error::TransportError;

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` after a GET. The body is kept as raw bytes; the
/// client decides how to turn it into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Outcome of a single `Transport::get` call.
pub type FetchResult = Result<HttpResponse, TransportError>;
