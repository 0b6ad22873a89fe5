//! HTTP Client Factory
//!
//! Provides a factory function for building reqwest clients with the
//! request timeout applied.

use std::time::Duration;

/// Build a `reqwest::Client` with the given per-request timeout.
pub fn build_http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("failed to build reqwest client")
}
