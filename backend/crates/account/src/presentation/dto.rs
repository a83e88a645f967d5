//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::account::Account;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
///
/// Every field is optional at the parse stage: an absent key must report
/// `Missing param: <field>`, not a deserialization failure, so presence is
/// checked by the handler after parsing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

/// Created account, as returned to the client
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Encoded representation, never the plaintext secret
    pub password: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.account_id.to_string(),
            name: account.name,
            email: account.email,
            password: account.password_hash,
        }
    }
}
