//! The profit/loss calculator.

use rust_decimal::Decimal;

use crate::recommendation::recommend;
use crate::types::{ReturnCalculationInput, ReturnCalculationResult};

/// Computes the full profit/loss estimate for a return.
///
/// The algorithm:
///
/// 1. `total_refund` - sum of selected unit prices.
/// 2. `total_cost_of_goods` - sum of selected unit costs.
/// 3. `processing_costs` - shipping cost plus handling fee.
/// 4. `immediate_cash_outlay` - `-(total_refund + processing_costs)`.
/// 5. `inventory_value_lost` - zero when resellable, otherwise the full
///    cost of goods.
/// 6. `net_impact` - `-(processing_costs + inventory_value_lost)`.
///
/// Total function with no error path: an empty selection simply yields
/// zero totals. Results keep full precision; see
/// [`ReturnCalculationResult::rounded`] for display.
#[must_use]
pub fn calculate(input: &ReturnCalculationInput) -> ReturnCalculationResult {
    let total_refund: Decimal = input.selected_units.iter().map(|u| u.price).sum();
    let total_cost_of_goods: Decimal = input.selected_units.iter().map(|u| u.cost).sum();

    let processing_costs = input.return_shipping_cost + input.handling_fee;
    let immediate_cash_outlay = -(total_refund + processing_costs);
    let inventory_value_lost = if input.is_resellable {
        Decimal::ZERO
    } else {
        total_cost_of_goods
    };
    let net_impact = -(processing_costs + inventory_value_lost);

    let recommendation = recommend(input.is_resellable);

    ReturnCalculationResult {
        total_refund,
        total_cost_of_goods,
        processing_costs,
        immediate_cash_outlay,
        inventory_value_lost,
        net_impact,
        is_resellable: input.is_resellable,
        return_reason: input.return_reason.clone(),
        suggestion: recommendation.suggestion,
        suggestion_tone: recommendation.tone,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::money::parse_money_or_zero;
    use crate::recommendation::SuggestionTone;
    use crate::types::ExpandedUnit;

    fn unit(id: &str, price: &str, cost: &str) -> ExpandedUnit {
        ExpandedUnit {
            unit_id: id.to_string(),
            title: "Test Product".to_string(),
            price: price.parse().unwrap(),
            cost: cost.parse().unwrap(),
        }
    }

    fn input(units: Vec<ExpandedUnit>, shipping: &str, handling: &str, resellable: bool) -> ReturnCalculationInput {
        ReturnCalculationInput {
            selected_units: units,
            return_shipping_cost: shipping.parse().unwrap(),
            handling_fee: handling.parse().unwrap(),
            is_resellable: resellable,
            return_reason: "Wrong Size".to_string(),
        }
    }

    #[test]
    fn resellable_return_costs_only_processing() {
        let result = calculate(&input(vec![unit("u-0", "100", "40")], "5", "2", true));

        assert_eq!(result.total_refund, Decimal::from(100));
        assert_eq!(result.total_cost_of_goods, Decimal::from(40));
        assert_eq!(result.processing_costs, Decimal::from(7));
        assert_eq!(result.immediate_cash_outlay, Decimal::from(-107));
        assert_eq!(result.inventory_value_lost, Decimal::ZERO);
        assert_eq!(result.net_impact, Decimal::from(-7));
        assert_eq!(result.suggestion_tone, SuggestionTone::Info);
    }

    #[test]
    fn unsellable_return_loses_cost_of_goods() {
        let result = calculate(&input(vec![unit("u-0", "100", "40")], "5", "2", false));

        assert_eq!(result.inventory_value_lost, Decimal::from(40));
        assert_eq!(result.net_impact, Decimal::from(-47));
        // Cash outlay does not depend on resellability.
        assert_eq!(result.immediate_cash_outlay, Decimal::from(-107));
        assert_eq!(result.suggestion_tone, SuggestionTone::Critical);
    }

    #[test]
    fn empty_selection_yields_zero_totals() {
        let result = calculate(&input(vec![], "0", "0", true));

        assert_eq!(result.total_refund, Decimal::ZERO);
        assert_eq!(result.immediate_cash_outlay, Decimal::ZERO);
        assert_eq!(result.net_impact, Decimal::ZERO);
    }

    #[test]
    fn totals_are_order_invariant() {
        let forward = calculate(&input(
            vec![unit("u-0", "10.25", "4.10"), unit("u-1", "20.50", "8.20")],
            "1",
            "1",
            false,
        ));
        let reversed = calculate(&input(
            vec![unit("u-1", "20.50", "8.20"), unit("u-0", "10.25", "4.10")],
            "1",
            "1",
            false,
        ));

        assert_eq!(forward.total_refund, reversed.total_refund);
        assert_eq!(forward.total_cost_of_goods, reversed.total_cost_of_goods);
        assert_eq!(forward.net_impact, reversed.net_impact);
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let fixture = input(vec![unit("u-0", "33.33", "11.11")], "4.50", "1.25", true);
        assert_eq!(calculate(&fixture), calculate(&fixture));
    }

    #[test]
    fn net_impact_never_below_cash_outlay() {
        for resellable in [true, false] {
            let result = calculate(&input(vec![unit("u-0", "100", "40")], "5", "2", resellable));
            assert!(result.net_impact >= result.immediate_cash_outlay);
        }
    }

    #[test]
    fn resellable_impact_diverges_from_outlay_by_refund() {
        let result = calculate(&input(vec![unit("u-0", "100", "40")], "5", "2", true));
        assert_eq!(
            result.net_impact - result.immediate_cash_outlay,
            result.total_refund
        );
    }

    #[test]
    fn unparsable_fee_text_degrades_to_zero() {
        // Form fields go through parse_money_or_zero before reaching the
        // calculator; "abc" must become 0 rather than failing.
        let result = calculate(&ReturnCalculationInput {
            selected_units: vec![unit("u-0", "100", "40")],
            return_shipping_cost: parse_money_or_zero("abc"),
            handling_fee: parse_money_or_zero(""),
            is_resellable: true,
            return_reason: "Other".to_string(),
        });

        assert_eq!(result.processing_costs, Decimal::ZERO);
        assert_eq!(result.net_impact, Decimal::ZERO);
        assert_eq!(result.immediate_cash_outlay, Decimal::from(-100));
    }

    #[test]
    fn full_precision_is_preserved_until_rounding() {
        let result = calculate(&input(
            vec![unit("u-0", "10.999", "3.333")],
            "0.001",
            "0.001",
            false,
        ));

        assert_eq!(result.processing_costs, "0.002".parse().unwrap());
        assert_eq!(result.net_impact, "-3.335".parse().unwrap());
        assert_eq!(result.rounded().net_impact, "-3.34".parse().unwrap());
    }
}
