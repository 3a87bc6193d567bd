//! Typed GraphQL documents and response structs for order lookup.
//!
//! The Admin API returns money amounts as decimal strings. Conversion into
//! the core [`OrderLineItem`] type goes through `parse_money_or_zero` so a
//! malformed amount degrades to zero instead of failing the lookup, and a
//! variant without a recorded inventory cost yields `unit_cost: None`.

use serde::{Deserialize, Serialize};

use profitguard_core::{OrderLineItem, parse_money_or_zero};

/// Query for fetching a single order by GID (the preload path).
pub const ORDER_BY_ID_QUERY: &str = r"
query GetOrderById($id: ID!) {
  order(id: $id) {
    id
    name
    lineItems(first: 20) {
      edges {
        node {
          id
          title
          quantity
          originalUnitPriceSet { shopMoney { amount } }
          variant { inventoryItem { unitCost { amount } } }
        }
      }
    }
  }
}";

/// Query for finding an order by its customer-facing order number.
pub const ORDER_BY_NUMBER_QUERY: &str = r"
query GetOrder($orderNumber: String!) {
  orders(first: 1, query: $orderNumber) {
    edges {
      node {
        id
        name
        lineItems(first: 20) {
          edges {
            node {
              id
              title
              quantity
              originalUnitPriceSet { shopMoney { amount } }
              variant { inventoryItem { unitCost { amount } } }
            }
          }
        }
      }
    }
  }
}";

/// An order as consumed by the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Shopify order GID.
    pub id: String,
    /// Customer-facing order name (e.g., "#1001").
    pub name: String,
    /// Line items on the order.
    pub line_items: Vec<OrderLineItem>,
}

// =============================================================================
// Raw GraphQL response shapes
// =============================================================================

/// `data` payload for the order-by-id query.
#[derive(Debug, Deserialize)]
pub(crate) struct OrderByIdData {
    pub order: Option<OrderNode>,
}

/// `data` payload for the order-by-number query.
#[derive(Debug, Deserialize)]
pub(crate) struct OrdersData {
    pub orders: Connection<OrderNode>,
}

/// Generic connection wrapper (`edges` / `node`).
#[derive(Debug, Deserialize)]
pub(crate) struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderNode {
    pub id: String,
    pub name: String,
    pub line_items: Connection<LineItemNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LineItemNode {
    pub id: String,
    pub title: String,
    pub quantity: i64,
    pub original_unit_price_set: MoneyBag,
    pub variant: Option<VariantNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MoneyBag {
    pub shop_money: MoneyV2,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoneyV2 {
    pub amount: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VariantNode {
    pub inventory_item: Option<InventoryItemNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InventoryItemNode {
    pub unit_cost: Option<MoneyV2>,
}

// =============================================================================
// Conversions
// =============================================================================

impl From<OrderNode> for Order {
    fn from(node: OrderNode) -> Self {
        Self {
            id: node.id,
            name: node.name,
            line_items: node
                .line_items
                .edges
                .into_iter()
                .map(|edge| convert_line_item(edge.node))
                .collect(),
        }
    }
}

fn convert_line_item(node: LineItemNode) -> OrderLineItem {
    let unit_cost = node
        .variant
        .and_then(|v| v.inventory_item)
        .and_then(|i| i.unit_cost)
        .map(|money| parse_money_or_zero(&money.amount));

    OrderLineItem {
        id: node.id,
        title: node.title,
        quantity: node.quantity,
        unit_price: parse_money_or_zero(&node.original_unit_price_set.shop_money.amount),
        unit_cost,
    }
}
