use serde::{Deserialize, Serialize};
use validator::Validate;

/// A menu entry. Created once via POST /menu, never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuItem {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
