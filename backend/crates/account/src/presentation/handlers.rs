//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::{AddAccountInput, AddAccountUseCase};
use crate::domain::encrypter::Encrypter;
use crate::domain::repository::AccountRepository;
use crate::domain::validator::EmailValidator;
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::{AccountResponse, SignUpRequest};

/// Shared state for account handlers
///
/// Collaborators are immutable, shareable capabilities selected at
/// construction time; handler invocations share nothing else.
pub struct AccountAppState<V, E, R> {
    pub validator: Arc<V>,
    pub encrypter: Arc<E>,
    pub repo: Arc<R>,
}

impl<V, E, R> Clone for AccountAppState<V, E, R> {
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
            encrypter: Arc::clone(&self.encrypter),
            repo: Arc::clone(&self.repo),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/account/signup
///
/// Checks are ordered and short-circuiting: required params in a fixed
/// order, then password confirmation, then email syntax. The first failing
/// check decides the response; the use case runs only after all of them
/// pass, exactly once.
pub async fn sign_up<V, E, R>(
    State(state): State<AccountAppState<V, E, R>>,
    Json(req): Json<SignUpRequest>,
) -> AccountResult<Json<AccountResponse>>
where
    V: EmailValidator + Send + Sync + 'static,
    E: Encrypter + Send + Sync + 'static,
    R: AccountRepository + Send + Sync + 'static,
{
    let name = require_param(req.name.as_deref(), "name")?;
    let email = require_param(req.email.as_deref(), "email")?;
    let password = require_param(req.password.as_deref(), "password")?;
    let confirmation = require_param(req.password_confirmation.as_deref(), "passwordConfirmation")?;

    // Exact equality: no trimming, no case folding
    if password != confirmation {
        return Err(AccountError::InvalidParam("passwordConfirmation"));
    }

    if !state.validator.is_valid(email)? {
        return Err(AccountError::InvalidParam("email"));
    }

    let use_case = AddAccountUseCase::new(state.encrypter.clone(), state.repo.clone());

    let account = use_case
        .execute(AddAccountInput {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        })
        .await?;

    Ok(Json(AccountResponse::from(account)))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// A param is present only if its key exists and the value is non-empty
fn require_param<'a>(value: Option<&'a str>, name: &'static str) -> AccountResult<&'a str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AccountError::MissingParam(name)),
    }
}
