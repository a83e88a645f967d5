//! Account Registration Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, capability traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and crypto implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Account signup with name + email + password
//! - Ordered request validation with structured param errors
//! - Passwords encoded with Argon2id before persistence
//!
//! ## Error Model
//! - Validation failures surface as 400 with the offending param named
//! - Any collaborator failure surfaces as 500 with a generic body only

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AccountConfig;
pub use error::{AccountError, AccountResult};
pub use infra::postgres::PgAccountRepository;
pub use presentation::router::account_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAccountRepository as AccountStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
