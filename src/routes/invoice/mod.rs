mod delete;
mod get;
mod post;
mod update;

pub use delete::delete_invoice;
pub use get::{get_all_invoices, get_invoice, InvoiceView};
pub use post::create_invoice;
pub use update::update_invoice;
