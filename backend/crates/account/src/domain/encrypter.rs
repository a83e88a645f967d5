//! Secret Encoder Trait
//!
//! One-way password encoding. Implementation is in infrastructure layer.

use crate::error::AccountResult;

/// One-way secret encoder
///
/// Salt and cost configuration belong to the implementation's constructor,
/// never to individual calls.
#[trait_variant::make(Encrypter: Send)]
pub trait LocalEncrypter {
    /// Encode a plaintext secret into its stored representation
    async fn encrypt(&self, plaintext: &str) -> AccountResult<String>;
}
