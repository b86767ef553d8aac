use crate::dtos::{CreateOrderPayload, CreateOrderResponse};
use crate::error::AppError;
use crate::models::Order;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use validator::Validate;

const ORDER_COLLECTION: &str = "order";

pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let total = Order::total_of(&payload.items);
    let order = Order {
        items: payload.items,
        total,
        customer_name: payload.customer_name,
        customer_phone: payload.customer_phone,
        delivery_address: payload.delivery_address,
    };

    let id = state.db.create(ORDER_COLLECTION, &order).await?;
    tracing::info!(id = %id, total = %total, "Order created");

    Ok(Json(CreateOrderResponse { id, total }))
}
