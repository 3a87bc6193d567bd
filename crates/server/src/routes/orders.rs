//! Order lookup handler.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use profitguard_core::{ExpandedUnit, expand};

use crate::error::AppError;
use crate::shopify::Order;
use crate::state::AppState;

/// Lookup request: an order number (preferred) or a full order GID.
#[derive(Debug, Deserialize)]
pub struct LookupOrderRequest {
    /// Customer-facing order number, with or without the leading `#`.
    pub order_number: Option<String>,
    /// Shopify order GID (used by the preload path).
    pub order_id: Option<String>,
}

/// The looked-up order with its per-unit expansion.
#[derive(Debug, Serialize)]
pub struct LookupOrderResponse {
    /// The order as returned by Shopify.
    pub order: Order,
    /// One selectable record per physical unit.
    pub units: Vec<ExpandedUnit>,
}

/// Look up an order and expand its line items into selectable units.
///
/// A missing order is a distinct not-found condition carrying a
/// user-displayable message, never an empty result.
///
/// # Errors
///
/// Returns `BadRequest` when neither field is provided, `OrderNotFound`
/// when the lookup comes back empty, or a Shopify error when the API call
/// fails.
#[instrument(skip(state, request))]
pub async fn lookup_order(
    State(state): State<AppState>,
    Json(request): Json<LookupOrderRequest>,
) -> Result<Json<LookupOrderResponse>, AppError> {
    let order = match (request.order_id.as_deref(), request.order_number.as_deref()) {
        (Some(id), _) if !id.trim().is_empty() => {
            state.shopify().order_by_id(id).await?.ok_or_else(|| {
                AppError::OrderNotFound(format!("Could not find an order with the id \"{id}\"."))
            })?
        }
        (_, Some(number)) if !number.trim().is_empty() => {
            let trimmed = number.trim();
            state
                .shopify()
                .order_by_number(trimmed)
                .await?
                .ok_or_else(|| {
                    let name = if trimmed.starts_with('#') {
                        trimmed.to_string()
                    } else {
                        format!("#{trimmed}")
                    };
                    AppError::OrderNotFound(format!(
                        "Could not find an order with the name \"{name}\"."
                    ))
                })?
        }
        _ => {
            return Err(AppError::BadRequest(
                "Please enter an order number.".to_string(),
            ));
        }
    };

    let units = expand(&order.line_items);

    Ok(Json(LookupOrderResponse { order, units }))
}
