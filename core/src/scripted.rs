//! Scripted transport for tests and demos.
//!
//! # Design
//! `ScriptedTransportFactory` holds a URL → `FetchResult` script. Every
//! transport it creates shares that script and a request log, so a test can
//! hand the factory to `ZooClient::new` and still inspect afterwards how many
//! transports were created and which URLs were requested.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::TransportError;
use crate::http::{FetchResult, HttpResponse};
use crate::transport::{Transport, TransportFactory};

type RequestLog = Arc<Mutex<Vec<String>>>;

#[derive(Debug, Default)]
pub struct ScriptedTransportFactory {
    script: HashMap<String, FetchResult>,
    requests: RequestLog,
    creates: AtomicUsize,
}

impl ScriptedTransportFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer GETs of `url` with `status` and `body`.
    pub fn respond(mut self, url: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.script
            .insert(url.to_string(), Ok(HttpResponse::new(status, body)));
        self
    }

    /// Fail GETs of `url` with a connection error.
    pub fn fail(mut self, url: &str, message: &str) -> Self {
        self.script.insert(
            url.to_string(),
            Err(TransportError::Connection(message.to_string())),
        );
        self
    }

    /// Number of times `create` has been called.
    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    /// URLs requested so far, across every transport this factory created.
    pub fn requests(&self) -> Vec<String> {
        lock(&self.requests).clone()
    }
}

impl TransportFactory for ScriptedTransportFactory {
    fn create(&self) -> Box<dyn Transport> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        Box::new(ScriptedTransport {
            script: self.script.clone(),
            requests: Arc::clone(&self.requests),
        })
    }
}

#[derive(Debug)]
pub struct ScriptedTransport {
    script: HashMap<String, FetchResult>,
    requests: RequestLog,
}

impl Transport for ScriptedTransport {
    fn get(&self, url: &str) -> FetchResult {
        lock(&self.requests).push(url.to_string());
        self.script.get(url).cloned().unwrap_or_else(|| {
            Err(TransportError::Connection(format!(
                "no scripted response for {url}"
            )))
        })
    }
}

fn lock(log: &RequestLog) -> std::sync::MutexGuard<'_, Vec<String>> {
    // A panicking test thread must not hide the log from the rest.
    log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
