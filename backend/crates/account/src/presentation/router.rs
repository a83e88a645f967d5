//! Account Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::encrypter::Encrypter;
use crate::domain::repository::AccountRepository;
use crate::domain::validator::EmailValidator;
use crate::infra::argon2::Argon2Encrypter;
use crate::infra::email::SyntaxEmailValidator;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AccountAppState};

/// Create the account router with the production collaborators
pub fn account_router(repo: PgAccountRepository, config: AccountConfig) -> Router {
    let state = AccountAppState {
        validator: Arc::new(SyntaxEmailValidator),
        encrypter: Arc::new(Argon2Encrypter::new(config.password_pepper)),
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/signup",
            post(handlers::sign_up::<SyntaxEmailValidator, Argon2Encrypter, PgAccountRepository>),
        )
        .with_state(state)
}

/// Create a generic account router for any set of collaborators
pub fn account_router_generic<V, E, R>(validator: V, encrypter: E, repo: R) -> Router
where
    V: EmailValidator + Send + Sync + 'static,
    E: Encrypter + Send + Sync + 'static,
    R: AccountRepository + Send + Sync + 'static,
{
    let state = AccountAppState {
        validator: Arc::new(validator),
        encrypter: Arc::new(encrypter),
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<V, E, R>))
        .with_state(state)
}
