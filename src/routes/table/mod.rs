mod delete;
mod get;
mod post;
mod update;

pub use delete::delete_table;
pub use get::{get_all_tables, get_table};
pub use post::create_table;
pub use update::update_table;
