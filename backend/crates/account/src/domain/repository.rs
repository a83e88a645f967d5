//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::account::{Account, NewAccount};
use crate::error::AccountResult;

/// Account repository trait
///
/// The store assigns the identifier; failures propagate as opaque errors.
/// No uniqueness constraint on email is enforced at this layer.
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Persist a new account and return the durable record
    async fn add(&self, account: NewAccount) -> AccountResult<Account>;
}
