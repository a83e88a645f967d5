//! PostgreSQL Repository Implementations

use chrono::Utc;
use sqlx::PgPool;

use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_id::AccountId;
use crate::error::AccountResult;

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Account Repository Implementation
// ============================================================================

impl AccountRepository for PgAccountRepository {
    async fn add(&self, account: NewAccount) -> AccountResult<Account> {
        // Identifier and creation time are assigned here, at the store
        let account_id = AccountId::new();
        let created_at = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                name,
                email,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(account_id.as_uuid())
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(Account {
            account_id,
            name: account.name,
            email: account.email,
            password_hash: account.password_hash,
            created_at,
        })
    }
}
