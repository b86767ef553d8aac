pub mod menu;
pub mod orders;

pub use menu::{CreatedResponse, MenuListResponse};
pub use orders::{CreateOrderPayload, CreateOrderResponse};
