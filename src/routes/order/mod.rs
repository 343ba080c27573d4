mod delete;
mod get;
mod post;
mod update;

pub use delete::delete_order;
pub use get::{get_all_orders, get_order};
pub use post::create_order;
pub use update::update_order;
