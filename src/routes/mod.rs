pub mod food;
mod health_check;
pub mod invoice;
pub mod menu;
pub mod order;
pub mod order_item;
pub mod table;
pub mod user;

pub use health_check::health_check;
