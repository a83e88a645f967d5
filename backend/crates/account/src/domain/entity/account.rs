//! Account Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::account_id::AccountId;

/// Account entity
///
/// The durable record produced by the account store. The identifier is
/// assigned by the store at creation time and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub account_id: AccountId,
    pub name: String,
    pub email: String,
    /// Encoded representation of the secret (PHC string format)
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Validated account-creation data as accepted by the store
///
/// The password arrives here already encoded. Never constructed with an
/// empty field: handler validation runs before this type exists.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
