//! Add Account Use Case
//!
//! Creates a new account from validated input.

use std::sync::Arc;

use crate::domain::encrypter::Encrypter;
use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::repository::AccountRepository;
use crate::error::AccountResult;

/// Add account input
///
/// Validated subset of the signup request, password still in plaintext.
/// Never constructed with an empty `name`, `email`, or `password`.
#[derive(Debug, Clone, PartialEq)]
pub struct AddAccountInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Add account use case
pub struct AddAccountUseCase<E, R>
where
    E: Encrypter,
    R: AccountRepository,
{
    encrypter: Arc<E>,
    repo: Arc<R>,
}

impl<E, R> AddAccountUseCase<E, R>
where
    E: Encrypter,
    R: AccountRepository,
{
    pub fn new(encrypter: Arc<E>, repo: Arc<R>) -> Self {
        Self { encrypter, repo }
    }

    /// Encode the secret, then persist with the encoded value substituted
    /// for the plaintext one. Collaborator failures propagate unchanged;
    /// no retries. The store call is the last side-effecting step, so a
    /// failure leaves no partial state behind.
    pub async fn execute(&self, input: AddAccountInput) -> AccountResult<Account> {
        let password_hash = self.encrypter.encrypt(&input.password).await?;

        let account = self
            .repo
            .add(NewAccount {
                name: input.name,
                email: input.email,
                password_hash,
            })
            .await?;

        tracing::info!(
            account_id = %account.account_id,
            "Account created"
        );

        Ok(account)
    }
}
