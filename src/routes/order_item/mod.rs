mod delete;
mod get;
mod post;
mod update;

pub use delete::delete_order_item;
pub use get::{get_all_order_items, get_order_item, get_order_items_by_order};
pub use post::create_order_items;
pub use update::update_order_item;
