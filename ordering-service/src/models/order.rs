use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single line of an order. The menu reference is an opaque string and the
/// price is a client-supplied snapshot; neither is checked against the menu
/// collection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItem {
    #[serde(rename = "ref")]
    pub item_ref: String,
    pub price: f64,
    #[validate(range(min = 1, message = "quantity must be positive"))]
    pub quantity: u32,
}

/// An immutable order document. `total` is always computed server-side from
/// the line items, never taken from the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub items: Vec<OrderItem>,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
}

impl Order {
    pub fn total_of(items: &[OrderItem]) -> f64 {
        items.iter().map(|i| i.price * f64::from(i.quantity)).sum()
    }
}
