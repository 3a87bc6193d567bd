//! Line-item expansion into per-unit records.

use crate::types::{ExpandedUnit, OrderLineItem};
use rust_decimal::Decimal;

/// Expands each line item into one [`ExpandedUnit`] per unit of quantity.
///
/// Unit ids are `{line_item_id}-{index}` with a zero-based index, unique
/// within the order. A missing unit cost is treated as zero; a line item
/// with `quantity <= 0` contributes no units. Side-effect-free.
#[must_use]
pub fn expand(line_items: &[OrderLineItem]) -> Vec<ExpandedUnit> {
    line_items
        .iter()
        .flat_map(|item| {
            let cost = item.unit_cost.unwrap_or(Decimal::ZERO);
            (0..item.quantity.max(0)).map(move |index| ExpandedUnit {
                unit_id: format!("{}-{index}", item.id),
                title: item.title.clone(),
                price: item.unit_price,
                cost,
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn line_item(id: &str, quantity: i64) -> OrderLineItem {
        OrderLineItem {
            id: id.to_string(),
            title: "Test Product".to_string(),
            quantity,
            unit_price: "19.99".parse().unwrap(),
            unit_cost: Some("7.50".parse().unwrap()),
        }
    }

    #[test]
    fn produces_exactly_quantity_units() {
        let units = expand(&[line_item("li-1", 3)]);
        assert_eq!(units.len(), 3);
    }

    #[test]
    fn unit_ids_are_unique_across_line_items() {
        let units = expand(&[line_item("li-1", 3), line_item("li-2", 2)]);
        let ids: HashSet<&str> = units.iter().map(|u| u.unit_id.as_str()).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn unit_ids_use_zero_based_index() {
        let units = expand(&[line_item("li-1", 2)]);
        assert_eq!(units[0].unit_id, "li-1-0");
        assert_eq!(units[1].unit_id, "li-1-1");
    }

    #[test]
    fn missing_cost_defaults_to_zero() {
        let mut item = line_item("li-1", 1);
        item.unit_cost = None;
        let units = expand(&[item]);
        assert_eq!(units[0].cost, Decimal::ZERO);
    }

    #[test]
    fn zero_quantity_contributes_no_units() {
        assert!(expand(&[line_item("li-1", 0)]).is_empty());
    }

    #[test]
    fn negative_quantity_contributes_no_units() {
        assert!(expand(&[line_item("li-1", -4)]).is_empty());
    }

    #[test]
    fn price_and_cost_copied_from_parent() {
        let units = expand(&[line_item("li-1", 1)]);
        assert_eq!(units[0].price, "19.99".parse().unwrap());
        assert_eq!(units[0].cost, "7.50".parse().unwrap());
    }
}
