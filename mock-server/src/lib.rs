//! Zoo message server.
//!
//! Two animals get a greeting; every other path answers 404 "Not found".

use axum::{
    http::{StatusCode, Uri},
    routing::get,
    Router,
};
use tokio::net::TcpListener;

pub const NOT_FOUND_BODY: &str = "Not found";

pub fn app() -> Router {
    Router::new()
        .route("/monkeys", get(monkeys))
        .route("/dogs", get(dogs))
        .fallback(not_found)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// The greeting served for `animal`.
pub fn greeting(animal: &str) -> String {
    format!("Hi there, I love {animal}!")
}

async fn monkeys() -> String {
    greeting("monkeys")
}

async fn dogs() -> String {
    greeting("dogs")
}

async fn not_found(uri: Uri) -> (StatusCode, &'static str) {
    tracing::debug!(path = uri.path(), "unknown animal");
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
