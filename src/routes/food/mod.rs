mod delete;
mod get;
mod post;
mod update;

pub use delete::delete_food;
pub use get::{get_all_foods, get_food};
pub use post::create_food;
pub use update::update_food;
