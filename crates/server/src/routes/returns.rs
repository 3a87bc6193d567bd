//! Calculation and persistence handlers.

use std::collections::HashSet;

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use profitguard_core::{
    ReturnCalculationInput, ReturnCalculationResult, calculate, expand, parse_money_or_zero,
};

use crate::error::AppError;
use crate::models::saved_return::{CONDITION_NOT_RESELLABLE, CONDITION_RESELLABLE};
use crate::models::{NewSavedReturn, SavedReturn};
use crate::shopify::Order;
use crate::state::AppState;

/// Request to run the profit/loss calculation.
///
/// Fee fields arrive as free text from form inputs and go through the
/// lenient parse-or-default path: unparsable text becomes zero, never an
/// error.
#[derive(Debug, Deserialize)]
pub struct CalculateReturnRequest {
    /// The order being evaluated (as returned by the lookup endpoint).
    pub order: Order,
    /// Unit ids the merchant checked as returned.
    pub returned_unit_ids: Vec<String>,
    /// Return shipping cost, free text.
    #[serde(default)]
    pub return_shipping_cost: String,
    /// Internal handling fee, free text.
    #[serde(default)]
    pub handling_fee: String,
    /// Whether the items can be restocked and resold.
    pub is_resellable: bool,
    /// Free-form return reason label.
    pub return_reason: String,
}

/// The calculation outcome, rounded for display.
///
/// The parsed fee inputs are echoed back so the client can hand the
/// complete payload to the save endpoint unchanged.
#[derive(Debug, Serialize)]
pub struct CalculateReturnResponse {
    /// The order the calculation applies to.
    pub order: Order,
    /// Rounded calculation result with suggestion and tone.
    pub result: ReturnCalculationResult,
    /// Shipping cost after lenient parsing.
    pub return_shipping_cost: Decimal,
    /// Handling fee after lenient parsing.
    pub handling_fee: Decimal,
}

/// Run the profit/loss calculation for a selection of returned units.
///
/// Pure computation over the request body; no shared state is touched and
/// no error can originate inside the calculation itself.
#[allow(clippy::unused_async)]
#[instrument(skip(request), fields(order_name = %request.order.name))]
pub async fn calculate_return(
    Json(request): Json<CalculateReturnRequest>,
) -> Json<CalculateReturnResponse> {
    let units = expand(&request.order.line_items);
    let selected_ids: HashSet<&str> = request
        .returned_unit_ids
        .iter()
        .map(String::as_str)
        .collect();
    let selected_units = units
        .into_iter()
        .filter(|unit| selected_ids.contains(unit.unit_id.as_str()))
        .collect();

    let return_shipping_cost = parse_money_or_zero(&request.return_shipping_cost);
    let handling_fee = parse_money_or_zero(&request.handling_fee);

    let input = ReturnCalculationInput {
        selected_units,
        return_shipping_cost,
        handling_fee,
        is_resellable: request.is_resellable,
        return_reason: request.return_reason,
    };

    let result = calculate(&input).rounded();

    Json(CalculateReturnResponse {
        order: request.order,
        result,
        return_shipping_cost: return_shipping_cost.round_dp(2),
        handling_fee: handling_fee.round_dp(2),
    })
}

/// Request to persist a finalized calculation.
#[derive(Debug, Deserialize)]
pub struct SaveReturnRequest {
    /// Shopify order GID.
    pub order_id: String,
    /// Customer-facing order name.
    pub order_name: String,
    /// The finalized calculation result.
    pub result: ReturnCalculationResult,
    /// Shipping cost as parsed at calculation time.
    pub return_shipping_cost: Decimal,
    /// Handling fee as parsed at calculation time.
    pub handling_fee: Decimal,
}

/// Save confirmation.
#[derive(Debug, Serialize)]
pub struct SaveReturnResponse {
    /// Always true on success.
    pub return_saved: bool,
    /// The persisted record.
    pub record: SavedReturn,
}

/// Persist a finalized calculation to history.
///
/// A failed write surfaces as a generic save failure; the calculation
/// result itself remains valid and can be retried.
///
/// # Errors
///
/// Returns a database error if the insert fails.
#[instrument(skip(state, request), fields(order_name = %request.order_name))]
pub async fn save_return(
    State(state): State<AppState>,
    Json(request): Json<SaveReturnRequest>,
) -> Result<Json<SaveReturnResponse>, AppError> {
    let result = &request.result;
    let product_condition = if result.is_resellable {
        CONDITION_RESELLABLE
    } else {
        CONDITION_NOT_RESELLABLE
    };

    let input = NewSavedReturn {
        shopify_order_id: request.order_id.clone(),
        shopify_order_name: request.order_name.clone(),
        net_profit_change: result.net_impact,
        total_revenue_lost: result.total_refund,
        inventory_value: result.total_cost_of_goods,
        is_resellable: result.is_resellable,
        suggestion: result.suggestion.clone(),
        return_reason: result.return_reason.clone(),
        product_condition: product_condition.to_string(),
        return_shipping_cost: request.return_shipping_cost,
        handling_fee: request.handling_fee,
    };

    let record = state.returns().insert(&input).await?;

    Ok(Json(SaveReturnResponse {
        return_saved: true,
        record,
    }))
}
