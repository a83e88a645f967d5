//! Infrastructure Layer
//!
//! Database implementations and external service adapters.

pub mod argon2;
pub mod email;
pub mod postgres;

pub use argon2::Argon2Encrypter;
pub use email::SyntaxEmailValidator;
pub use postgres::PgAccountRepository;
