//! Data types flowing through the calculation pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::recommendation::SuggestionTone;

/// A single line item from a looked-up order.
///
/// This is the read-only boundary type produced by the order source.
/// `unit_cost` is absent when the variant has no recorded inventory cost;
/// expansion treats that as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Shopify line item GID (e.g., `gid://shopify/LineItem/123`).
    pub id: String,
    /// Product title for display.
    pub title: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Price per unit in shop currency.
    pub unit_price: Decimal,
    /// Inventory cost per unit, if known.
    pub unit_cost: Option<Decimal>,
}

/// One physical unit of a line item, selectable for return.
///
/// A line item with quantity 3 expands into three units with ids
/// `{line_item_id}-0` through `{line_item_id}-2`. Units are immutable and
/// discarded when a new order is looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedUnit {
    /// Unique id within the order: `{line_item_id}-{index}`.
    pub unit_id: String,
    /// Product title, copied from the parent line item.
    pub title: String,
    /// Refund value of this unit.
    pub price: Decimal,
    /// Inventory cost of this unit (zero when the source had none).
    pub cost: Decimal,
}

/// Input to the profit/loss calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnCalculationInput {
    /// Units the merchant marked as returned. May be empty, in which case
    /// all totals come out zero.
    pub selected_units: Vec<ExpandedUnit>,
    /// Cost of shipping the items back.
    pub return_shipping_cost: Decimal,
    /// Internal handling fee for processing the return.
    pub handling_fee: Decimal,
    /// Whether the returned items can be restocked and resold.
    pub is_resellable: bool,
    /// Free-form return reason label, passed through unvalidated.
    pub return_reason: String,
}

/// The finished profit/loss estimate.
///
/// All monetary fields are full precision; call [`Self::rounded`] at the
/// presentation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnCalculationResult {
    /// Sum of selected unit prices (refunded to the customer).
    pub total_refund: Decimal,
    /// Sum of selected unit inventory costs.
    pub total_cost_of_goods: Decimal,
    /// Return shipping cost plus handling fee.
    pub processing_costs: Decimal,
    /// Cash leaving the merchant at the moment of return:
    /// `-(total_refund + processing_costs)`.
    pub immediate_cash_outlay: Decimal,
    /// Inventory value written off: zero when resellable, otherwise the
    /// full cost of goods.
    pub inventory_value_lost: Decimal,
    /// Final estimated financial effect after accounting for recoverable
    /// inventory: `-(processing_costs + inventory_value_lost)`.
    pub net_impact: Decimal,
    /// Whether the items were judged resellable.
    pub is_resellable: bool,
    /// Return reason label, carried through from the input.
    pub return_reason: String,
    /// Advisory text for the merchant.
    pub suggestion: String,
    /// Severity tone of the suggestion.
    pub suggestion_tone: SuggestionTone,
}

impl ReturnCalculationResult {
    /// Returns a copy with every monetary field rounded to two decimal
    /// places for display.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            total_refund: self.total_refund.round_dp(2),
            total_cost_of_goods: self.total_cost_of_goods.round_dp(2),
            processing_costs: self.processing_costs.round_dp(2),
            immediate_cash_outlay: self.immediate_cash_outlay.round_dp(2),
            inventory_value_lost: self.inventory_value_lost.round_dp(2),
            net_impact: self.net_impact.round_dp(2),
            is_resellable: self.is_resellable,
            return_reason: self.return_reason.clone(),
            suggestion: self.suggestion.clone(),
            suggestion_tone: self.suggestion_tone,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn rounded_truncates_to_two_places() {
        let result = ReturnCalculationResult {
            total_refund: "100.005".parse().unwrap(),
            total_cost_of_goods: "40.333".parse().unwrap(),
            processing_costs: "7.129".parse().unwrap(),
            immediate_cash_outlay: "-107.134".parse().unwrap(),
            inventory_value_lost: Decimal::ZERO,
            net_impact: "-7.129".parse().unwrap(),
            is_resellable: true,
            return_reason: "Wrong Size".to_string(),
            suggestion: String::new(),
            suggestion_tone: SuggestionTone::Info,
        };

        let rounded = result.rounded();
        assert_eq!(rounded.total_cost_of_goods, "40.33".parse().unwrap());
        assert_eq!(rounded.processing_costs, "7.13".parse().unwrap());
        assert_eq!(rounded.net_impact, "-7.13".parse().unwrap());
    }

    #[test]
    fn line_item_round_trips_through_json() {
        let item = OrderLineItem {
            id: "gid://shopify/LineItem/1".to_string(),
            title: "Blue Hoodie".to_string(),
            quantity: 2,
            unit_price: "49.99".parse().unwrap(),
            unit_cost: None,
        };

        let json = serde_json::to_string(&item).unwrap();
        let back: OrderLineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
