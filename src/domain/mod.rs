mod payment;
mod quantity;

pub use payment::{PaymentMethod, PaymentStatus};
pub use quantity::Quantity;
