pub mod extractors;
pub mod jwt;
pub mod middleware;

pub use extractors::AuthenticatedUser;
pub use jwt::{TokenPair, TokenSubject, Tokenizer};
pub use middleware::AuthGate;
