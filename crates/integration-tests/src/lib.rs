//! Integration tests for ProfitGuard.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply migrations
//! cargo run -p profitguard-cli -- migrate
//!
//! # Start the server
//! cargo run -p profitguard-server
//!
//! # Run the integration tests
//! cargo test -p profitguard-integration-tests -- --ignored
//! ```
//!
//! The tests live in `tests/` and talk to a running server over HTTP.
//! They are `#[ignore]`d by default because they require a running server
//! with a database and, for the order lookup tests, Shopify credentials.
