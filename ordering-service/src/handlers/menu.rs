use crate::dtos::{CreatedResponse, MenuListResponse};
use crate::error::AppError;
use crate::models::MenuItem;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use validator::Validate;

const MENU_COLLECTION: &str = "menuitem";

pub async fn list_menu(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let items = state.db.list(MENU_COLLECTION).await?;
    Ok(Json(MenuListResponse { items }))
}

pub async fn create_menu_item(
    State(state): State<AppState>,
    Json(item): Json<MenuItem>,
) -> Result<impl IntoResponse, AppError> {
    item.validate()?;

    let id = state.db.create(MENU_COLLECTION, &item).await?;
    tracing::info!(id = %id, name = %item.name, "Menu item created");

    Ok(Json(CreatedResponse { id }))
}
