//! HTTP client for the Shopify Admin GraphQL API.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::json;
use tracing::instrument;

use crate::config::ShopifyConfig;

use super::types::{
    ORDER_BY_ID_QUERY, ORDER_BY_NUMBER_QUERY, Order, OrderByIdData, OrdersData,
};
use super::{GraphQLError, ShopifyError};

/// Client for the Shopify Admin GraphQL API.
///
/// Cheap to clone; the underlying `reqwest::Client` and credentials are
/// shared behind an `Arc`.
#[derive(Clone)]
pub struct ShopifyClient {
    inner: Arc<ShopifyClientInner>,
}

struct ShopifyClientInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
}

/// GraphQL response wrapper.
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLErrorResponse>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorResponse {
    message: String,
}

impl ShopifyClient {
    /// Create a new Admin API client.
    #[must_use]
    pub fn new(config: &ShopifyConfig) -> Self {
        let endpoint = format!(
            "https://{}/admin/api/{}/graphql.json",
            config.store, config.api_version
        );

        Self {
            inner: Arc::new(ShopifyClientInner {
                client: reqwest::Client::new(),
                endpoint,
                access_token: config.access_token.expose_secret().to_string(),
            }),
        }
    }

    /// Get an order by GID.
    ///
    /// Returns `Ok(None)` when no order exists with that id - callers must
    /// surface that as a distinct "order not found" condition.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn order_by_id(&self, id: &str) -> Result<Option<Order>, ShopifyError> {
        let variables = json!({ "id": id });
        let data: OrderByIdData = self.execute(ORDER_BY_ID_QUERY, variables).await?;

        Ok(data.order.map(Order::from))
    }

    /// Find an order by its customer-facing order number.
    ///
    /// A missing leading `#` is added before searching, matching how order
    /// names appear in the admin (e.g., `1001` becomes `#1001`). Returns
    /// `Ok(None)` when no order matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self), fields(order_number = %number))]
    pub async fn order_by_number(&self, number: &str) -> Result<Option<Order>, ShopifyError> {
        let name = normalize_order_number(number);
        let variables = json!({ "orderNumber": format!("name:{name}") });
        let data: OrdersData = self.execute(ORDER_BY_NUMBER_QUERY, variables).await?;

        Ok(data
            .orders
            .edges
            .into_iter()
            .next()
            .map(|edge| Order::from(edge.node)))
    }

    /// Execute a GraphQL query.
    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, ShopifyError> {
        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header("X-Shopify-Access-Token", &self.inner.access_token)
            .header("Content-Type", "application/json")
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(ShopifyError::RateLimited(retry_after));
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ShopifyError::Unauthorized(format!(
                "Shopify rejected the access token (HTTP {status})"
            )));
        }

        // Read the body as text first for better error diagnostics.
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Shopify API returned non-success status"
            );
            return Err(ShopifyError::GraphQL(vec![GraphQLError {
                message: format!(
                    "HTTP {status}: {}",
                    response_text.chars().take(200).collect::<String>()
                ),
            }]));
        }

        let parsed: GraphQLResponse<T> = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %response_text.chars().take(500).collect::<String>(),
                "Failed to parse Shopify GraphQL response"
            );
            ShopifyError::Parse(e)
        })?;

        if let Some(errors) = parsed.errors
            && !errors.is_empty()
        {
            return Err(ShopifyError::GraphQL(
                errors
                    .into_iter()
                    .map(|e| GraphQLError { message: e.message })
                    .collect(),
            ));
        }

        parsed.data.ok_or_else(|| {
            ShopifyError::GraphQL(vec![GraphQLError {
                message: "Response contained no data".to_string(),
            }])
        })
    }
}

/// Prefix an order number with `#` unless it already has one.
fn normalize_order_number(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_hash_prefix() {
        assert_eq!(normalize_order_number("1001"), "#1001");
    }

    #[test]
    fn normalize_keeps_existing_hash() {
        assert_eq!(normalize_order_number("#1001"), "#1001");
    }

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(normalize_order_number("  1001 "), "#1001");
    }
}
