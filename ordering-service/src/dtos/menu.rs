use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Menu records as returned by the gateway: arbitrary stored fields plus a
/// string `id`, never the store-native identifier.
#[derive(Debug, Serialize)]
pub struct MenuListResponse {
    pub items: Vec<Value>,
}
