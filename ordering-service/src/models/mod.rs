pub mod menu_item;
pub mod order;

pub use menu_item::MenuItem;
pub use order::{Order, OrderItem};
