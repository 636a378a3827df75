//! Integration tests for Copperleaf Market.
//!
//! # Running Tests
//!
//! The tests talk to a running storefront over HTTP and are `#[ignore]`d by
//! default:
//!
//! ```bash
//! cargo run -p copperleaf-cli -- migrate
//! cargo run -p copperleaf-cli -- seed
//! cargo run -p copperleaf-storefront &
//! cargo test -p copperleaf-integration-tests -- --ignored
//! ```

use reqwest::Client;

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("SITE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create an HTTP client for talking to the storefront.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}
