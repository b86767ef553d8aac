pub mod health;
pub mod menu;
pub mod orders;

pub use health::{get_schema, read_root, test_database};
pub use menu::{create_menu_item, list_menu};
pub use orders::create_order;
