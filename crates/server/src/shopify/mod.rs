//! Shopify Admin API order source.
//!
//! The calculator only needs read access to a single order at a time, so
//! this module wraps two GraphQL queries (lookup by GID, lookup by order
//! number) behind [`ShopifyClient`]. Queries are sent with `reqwest` as
//! plain GraphQL documents and deserialized into typed response structs.

mod client;
pub mod types;

pub use client::ShopifyClient;
pub use types::{Order, ORDER_BY_ID_QUERY, ORDER_BY_NUMBER_QUERY};

use thiserror::Error;

/// Errors that can occur when interacting with the Shopify Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_errors_join_messages() {
        let err = ShopifyError::GraphQL(vec![
            GraphQLError {
                message: "first".to_string(),
            },
            GraphQLError {
                message: "second".to_string(),
            },
        ]);
        assert_eq!(err.to_string(), "GraphQL errors: first; second");
    }
}
