//! HTTP client creation and configuration utilities

use reqwest::Client;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Creates the shared HTTP client used by every poller.
///
/// No client-wide timeout is set: required Riot API calls attach their own
/// per-request timeout, while the Data Dragon version lookup runs unbounded.
/// The client is cheap to clone and clones share one connection pool.
pub fn create_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Creates an HTTP client for testing
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client().expect("Failed to create test HTTP client")
}
