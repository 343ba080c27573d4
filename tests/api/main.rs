mod food;
mod health_check;
mod invoice;
mod menu;
mod order_item;
mod routing;
mod table;
mod user;
