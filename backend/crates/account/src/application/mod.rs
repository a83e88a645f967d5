//! Application Layer
//!
//! Use cases and application services.

pub mod add_account;
pub mod config;

// Re-exports
pub use add_account::{AddAccountInput, AddAccountUseCase};
pub use config::AccountConfig;
