//! Argon2 Encrypter Adapter
//!
//! Adapts `platform::password` hashing to the domain `Encrypter` contract.
//! Nothing Argon2-specific leaks through the trait, so the implementation
//! can be swapped without touching the use case.

use platform::password::ClearTextPassword;

use crate::domain::encrypter::Encrypter;
use crate::error::{AccountError, AccountResult};

/// Argon2id-backed secret encoder
///
/// Pepper and the underlying cost parameters are fixed at construction.
pub struct Argon2Encrypter {
    pepper: Option<Vec<u8>>,
}

impl Argon2Encrypter {
    pub fn new(pepper: Option<Vec<u8>>) -> Self {
        Self { pepper }
    }
}

impl Encrypter for Argon2Encrypter {
    async fn encrypt(&self, plaintext: &str) -> AccountResult<String> {
        let password = ClearTextPassword::new(plaintext.to_owned());
        let pepper = self.pepper.clone();

        // Memory-hard hashing stays off the async worker threads
        let hash = tokio::task::spawn_blocking(move || password.hash(pepper.as_deref()))
            .await
            .map_err(|e| AccountError::Internal(e.to_string()))?
            .map_err(|e| AccountError::Encryption(e.to_string()))?;

        Ok(hash)
    }
}
