//! Email Format Validator Trait

use crate::error::AccountResult;

/// Syntactic email validation capability
///
/// A pure predicate: `Ok(false)` means the address is malformed. `Err` is
/// an unexpected failure inside the validator itself, which the handler
/// maps to a server error.
pub trait EmailValidator {
    fn is_valid(&self, email: &str) -> AccountResult<bool>;
}
