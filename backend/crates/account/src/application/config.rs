//! Application Configuration
//!
//! Configuration for the account application layer.

/// Account application configuration
#[derive(Debug, Clone, Default)]
pub struct AccountConfig {
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AccountConfig {
    /// Create config with a pepper
    pub fn with_pepper(pepper: Vec<u8>) -> Self {
        Self {
            password_pepper: Some(pepper),
        }
    }
}
