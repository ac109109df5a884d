//! Reads the greeting for an animal from the zoo server.
//!
//! # Design
//! `ZooClient` owns one transport, created by the factory exactly once in
//! `new`. `read_message` builds `{base_url}/{animal}`, performs one GET and
//! passes the body through as text whenever the transport produced a
//! response, whatever its status code. A transport failure becomes an empty
//! string and is only visible in the logs.

use tracing::{debug, warn};

use crate::config::ZooConfig;
use crate::transport::{Transport, TransportFactory};

pub struct ZooClient {
    base_url: String,
    transport: Box<dyn Transport>,
}

impl ZooClient {
    pub fn new(factory: &dyn TransportFactory, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport: factory.create(),
        }
    }

    pub fn from_config(factory: &dyn TransportFactory, config: &ZooConfig) -> Self {
        Self::new(factory, &config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, animal: &str) -> String {
        format!("{}/{animal}", self.base_url)
    }

    /// Fetch the message for `animal`.
    ///
    /// Returns the response body verbatim (including "not found" bodies), or
    /// an empty string if the transport failed.
    pub fn read_message(&self, animal: &str) -> String {
        let url = self.url_for(animal);
        debug!(%url, "fetching zoo message");
        match self.transport.get(&url) {
            Ok(response) => {
                debug!(%url, status = response.status, "zoo message received");
                String::from_utf8_lossy(&response.body).into_owned()
            }
            Err(err) => {
                warn!(%url, error = %err, "transport failed, returning empty message");
                String::new()
            }
        }
    }
}

impl std::fmt::Debug for ZooClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZooClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::error::TransportError;
    use crate::http::HttpResponse;
    use crate::transport::{MockTransport, MockTransportFactory};

    const BASE_URL: &str = "http://localhost:8080";

    /// A factory that must be asked exactly once and yields `transport`.
    fn factory_for(transport: MockTransport) -> MockTransportFactory {
        let mut factory = MockTransportFactory::new();
        factory
            .expect_create()
            .times(1)
            .return_once(move || Box::new(transport));
        factory
    }

    fn client_with(transport: MockTransport) -> ZooClient {
        ZooClient::new(&factory_for(transport), BASE_URL)
    }

    #[test]
    fn known_animals_return_greeting() {
        for (animal, greeting) in [
            ("monkeys", "Hi there, I love monkeys!"),
            ("dogs", "Hi there, I love dogs!"),
        ] {
            let mut transport = MockTransport::new();
            transport
                .expect_get()
                .with(eq(format!("{BASE_URL}/{animal}")))
                .times(1)
                .returning(move |_| Ok(HttpResponse::new(200, greeting)));

            assert_eq!(client_with(transport).read_message(animal), greeting);
        }
    }

    #[test]
    fn not_found_body_is_passed_through() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .with(eq("http://localhost:8080/elephants"))
            .times(1)
            .returning(|_| Ok(HttpResponse::new(404, "Not found")));

        assert_eq!(client_with(transport).read_message("elephants"), "Not found");
    }

    #[test]
    fn server_error_body_is_passed_through() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(|_| Ok(HttpResponse::new(500, "boom")));

        assert_eq!(client_with(transport).read_message("dogs"), "boom");
    }

    #[test]
    fn transport_failure_yields_empty_string() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .with(eq("http://localhost:8080/dogs"))
            .times(1)
            .returning(|_| Err(TransportError::Connection("connection error".to_string())));

        assert_eq!(client_with(transport).read_message("dogs"), "");
    }

    #[test]
    fn empty_body_and_failure_look_the_same() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(|_| Ok(HttpResponse::new(200, Vec::new())));

        assert_eq!(client_with(transport).read_message("dogs"), "");
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .times(1)
            .returning(|_| Ok(HttpResponse::new(200, vec![b'h', b'i', 0xff])));

        assert_eq!(client_with(transport).read_message("dogs"), "hi\u{fffd}");
    }

    #[test]
    fn factory_is_not_consulted_per_request() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .times(3)
            .returning(|_| Ok(HttpResponse::new(200, "ok")));

        // `times(1)` on create fails the test on any second call.
        let client = client_with(transport);
        for _ in 0..3 {
            client.read_message("monkeys");
        }
    }

    #[test]
    fn repeated_reads_are_idempotent() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .with(eq("http://localhost:8080/monkeys"))
            .times(2)
            .returning(|_| Ok(HttpResponse::new(200, "Hi there, I love monkeys!")));

        let client = client_with(transport);
        let first = client.read_message("monkeys");
        let second = client.read_message("monkeys");
        assert_eq!(first, second);
        assert_eq!(first, "Hi there, I love monkeys!");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let mut transport = MockTransport::new();
        transport
            .expect_get()
            .with(eq("http://localhost:8080/dogs"))
            .times(1)
            .returning(|_| Ok(HttpResponse::new(200, "Hi there, I love dogs!")));

        let client = ZooClient::new(&factory_for(transport), "http://localhost:8080/");
        assert_eq!(client.base_url(), BASE_URL);
        assert_eq!(client.read_message("dogs"), "Hi there, I love dogs!");
    }

    #[test]
    fn from_config_uses_configured_base_url() {
        let config = ZooConfig {
            base_url: "http://zoo.internal:9000".to_string(),
            ..ZooConfig::default()
        };
        let client = ZooClient::from_config(&factory_for(MockTransport::new()), &config);
        assert_eq!(client.url_for("dogs"), "http://zoo.internal:9000/dogs");
    }
}
