//! Unit tests for the account crate
//!
//! Handler and use-case tests run against hand-rolled stub collaborators
//! implementing the domain capability traits.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::domain::encrypter::Encrypter;
use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::repository::AccountRepository;
use crate::domain::validator::EmailValidator;
use crate::domain::value_object::account_id::AccountId;
use crate::error::{AccountError, AccountResult};

// ============================================================================
// Stub collaborators
// ============================================================================

/// Email validator stub: fixed verdict, records received addresses
struct EmailValidatorStub {
    verdict: bool,
    fail: bool,
    calls: Mutex<Vec<String>>,
}

impl EmailValidatorStub {
    fn accepting() -> Self {
        Self {
            verdict: true,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn rejecting() -> Self {
        Self {
            verdict: false,
            ..Self::accepting()
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::accepting()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl EmailValidator for EmailValidatorStub {
    fn is_valid(&self, email: &str) -> AccountResult<bool> {
        self.calls.lock().unwrap().push(email.to_owned());
        if self.fail {
            return Err(AccountError::Validation("validator exploded".to_owned()));
        }
        Ok(self.verdict)
    }
}

/// Encrypter stub: fixed hash, records received plaintexts
struct EncrypterStub {
    fail: bool,
    calls: Mutex<Vec<String>>,
}

impl EncrypterStub {
    fn hashing() -> Self {
        Self {
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::hashing()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Encrypter for EncrypterStub {
    async fn encrypt(&self, plaintext: &str) -> AccountResult<String> {
        self.calls.lock().unwrap().push(plaintext.to_owned());
        if self.fail {
            return Err(AccountError::Encryption("hashing exploded".to_owned()));
        }
        Ok("hashed_password".to_owned())
    }
}

/// Repository stub: fixed stored record, records received accounts
struct AccountRepositoryStub {
    fail: bool,
    account_id: AccountId,
    calls: Mutex<Vec<NewAccount>>,
}

impl AccountRepositoryStub {
    fn storing() -> Self {
        Self {
            fail: false,
            account_id: AccountId::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::storing()
        }
    }

    fn calls(&self) -> Vec<NewAccount> {
        self.calls.lock().unwrap().clone()
    }
}

impl AccountRepository for AccountRepositoryStub {
    async fn add(&self, account: NewAccount) -> AccountResult<Account> {
        self.calls.lock().unwrap().push(account);
        if self.fail {
            return Err(AccountError::Internal("store exploded".to_owned()));
        }
        Ok(Account {
            account_id: self.account_id,
            name: "valid_name".to_owned(),
            email: "valid_email".to_owned(),
            password_hash: "valid_password".to_owned(),
            created_at: Utc::now(),
        })
    }
}

// ============================================================================
// Handler tests
// ============================================================================

#[cfg(test)]
mod handler_tests {
    use super::*;

    use axum::Json;
    use axum::extract::State;
    use axum::http::StatusCode;

    use crate::presentation::dto::{AccountResponse, SignUpRequest};
    use crate::presentation::handlers::{AccountAppState, sign_up};

    /// System under test plus the stubs it was built from
    struct Sut {
        validator: Arc<EmailValidatorStub>,
        encrypter: Arc<EncrypterStub>,
        repo: Arc<AccountRepositoryStub>,
    }

    impl Sut {
        fn state(&self) -> AccountAppState<EmailValidatorStub, EncrypterStub, AccountRepositoryStub> {
            AccountAppState {
                validator: self.validator.clone(),
                encrypter: self.encrypter.clone(),
                repo: self.repo.clone(),
            }
        }

        async fn handle(&self, req: SignUpRequest) -> AccountResult<Json<AccountResponse>> {
            sign_up(State(self.state()), Json(req)).await
        }
    }

    fn make_sut() -> Sut {
        Sut {
            validator: Arc::new(EmailValidatorStub::accepting()),
            encrypter: Arc::new(EncrypterStub::hashing()),
            repo: Arc::new(AccountRepositoryStub::storing()),
        }
    }

    fn valid_request() -> SignUpRequest {
        SignUpRequest {
            name: Some("any name".to_owned()),
            email: Some("any_email@mail.com".to_owned()),
            password: Some("any_password".to_owned()),
            password_confirmation: Some("any_password".to_owned()),
        }
    }

    #[tokio::test]
    async fn test_400_if_no_name() {
        let sut = make_sut();
        let req = SignUpRequest {
            name: None,
            ..valid_request()
        };

        let err = sut.handle(req).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(matches!(err, AccountError::MissingParam("name")));
        assert_eq!(err.to_string(), "Missing param: name");
    }

    #[tokio::test]
    async fn test_400_if_no_email() {
        let sut = make_sut();
        let req = SignUpRequest {
            email: None,
            ..valid_request()
        };

        let err = sut.handle(req).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(matches!(err, AccountError::MissingParam("email")));
    }

    #[tokio::test]
    async fn test_400_if_no_password() {
        let sut = make_sut();
        let req = SignUpRequest {
            password: None,
            ..valid_request()
        };

        let err = sut.handle(req).await.unwrap_err();

        assert!(matches!(err, AccountError::MissingParam("password")));
    }

    #[tokio::test]
    async fn test_400_if_no_password_confirmation() {
        let sut = make_sut();
        let req = SignUpRequest {
            password_confirmation: None,
            ..valid_request()
        };

        let err = sut.handle(req).await.unwrap_err();

        assert!(matches!(
            err,
            AccountError::MissingParam("passwordConfirmation")
        ));
        assert_eq!(err.to_string(), "Missing param: passwordConfirmation");
    }

    #[tokio::test]
    async fn test_empty_value_counts_as_missing() {
        let sut = make_sut();
        let req = SignUpRequest {
            name: Some(String::new()),
            ..valid_request()
        };

        let err = sut.handle(req).await.unwrap_err();

        assert!(matches!(err, AccountError::MissingParam("name")));
    }

    #[tokio::test]
    async fn test_first_missing_param_wins() {
        let sut = make_sut();

        // All four absent: `name` is reported
        let err = sut.handle(SignUpRequest::default()).await.unwrap_err();
        assert!(matches!(err, AccountError::MissingParam("name")));

        // `email` and `password` absent: `email` is reported
        let req = SignUpRequest {
            email: None,
            password: None,
            ..valid_request()
        };
        let err = sut.handle(req).await.unwrap_err();
        assert!(matches!(err, AccountError::MissingParam("email")));
    }

    #[tokio::test]
    async fn test_400_if_password_confirmation_fails() {
        let sut = make_sut();
        let req = SignUpRequest {
            password_confirmation: Some("invalid_password".to_owned()),
            ..valid_request()
        };

        let err = sut.handle(req).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(matches!(
            err,
            AccountError::InvalidParam("passwordConfirmation")
        ));
        assert_eq!(err.to_string(), "Invalid param: passwordConfirmation");

        // Short-circuit: the mismatch is decided before the email check
        assert!(sut.validator.calls().is_empty());
    }

    #[tokio::test]
    async fn test_400_if_invalid_email() {
        let sut = Sut {
            validator: Arc::new(EmailValidatorStub::rejecting()),
            ..make_sut()
        };
        let req = SignUpRequest {
            email: Some("invalid_email@mail.com".to_owned()),
            ..valid_request()
        };

        let err = sut.handle(req).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(matches!(err, AccountError::InvalidParam("email")));
        assert_eq!(err.to_string(), "Invalid param: email");
    }

    #[tokio::test]
    async fn test_validator_receives_the_email_once() {
        let sut = make_sut();

        sut.handle(valid_request()).await.unwrap();

        assert_eq!(sut.validator.calls(), vec!["any_email@mail.com"]);
    }

    #[tokio::test]
    async fn test_500_if_validator_fails() {
        let sut = Sut {
            validator: Arc::new(EmailValidatorStub::failing()),
            ..make_sut()
        };

        let err = sut.handle(valid_request()).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        // The cause never reaches the client
        assert_eq!(err.to_app_error().message(), "Internal server error");
    }

    #[tokio::test]
    async fn test_500_if_encrypter_fails() {
        let sut = Sut {
            encrypter: Arc::new(EncrypterStub::failing()),
            ..make_sut()
        };

        let err = sut.handle(valid_request()).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_app_error().message(), "Internal server error");
    }

    #[tokio::test]
    async fn test_500_if_store_fails() {
        let sut = Sut {
            repo: Arc::new(AccountRepositoryStub::failing()),
            ..make_sut()
        };

        let err = sut.handle(valid_request()).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_app_error().message(), "Internal server error");
    }

    #[tokio::test]
    async fn test_store_not_reached_when_validation_fails() {
        let sut = make_sut();
        let req = SignUpRequest {
            password_confirmation: Some("invalid_password".to_owned()),
            ..valid_request()
        };

        sut.handle(req).await.unwrap_err();

        assert!(sut.encrypter.calls().is_empty());
        assert!(sut.repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_use_case_receives_the_plaintext_values_once() {
        let sut = make_sut();

        sut.handle(valid_request()).await.unwrap();

        // The encrypter sees the plaintext secret exactly once
        assert_eq!(sut.encrypter.calls(), vec!["any_password"]);
        // The store sees the encoded secret substituted for the plaintext
        assert_eq!(
            sut.repo.calls(),
            vec![NewAccount {
                name: "any name".to_owned(),
                email: "any_email@mail.com".to_owned(),
                password_hash: "hashed_password".to_owned(),
            }]
        );
    }

    #[tokio::test]
    async fn test_200_with_the_stored_record_on_valid_data() {
        use axum::response::IntoResponse;

        let sut = make_sut();

        let response = sut.handle(valid_request()).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let Json(body) = sut.handle(valid_request()).await.unwrap();

        assert_eq!(
            body,
            AccountResponse {
                id: sut.repo.account_id.to_string(),
                name: "valid_name".to_owned(),
                email: "valid_email".to_owned(),
                password: "valid_password".to_owned(),
            }
        );
    }
}

// ============================================================================
// Use case tests
// ============================================================================

#[cfg(test)]
mod use_case_tests {
    use super::*;

    use crate::application::add_account::{AddAccountInput, AddAccountUseCase};

    fn input() -> AddAccountInput {
        AddAccountInput {
            name: "any name".to_owned(),
            email: "any_email@mail.com".to_owned(),
            password: "any_password".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_encodes_before_persisting() {
        let encrypter = Arc::new(EncrypterStub::hashing());
        let repo = Arc::new(AccountRepositoryStub::storing());
        let sut = AddAccountUseCase::new(encrypter.clone(), repo.clone());

        let account = sut.execute(input()).await.unwrap();

        assert_eq!(encrypter.calls(), vec!["any_password"]);
        assert_eq!(repo.calls()[0].password_hash, "hashed_password");
        assert_eq!(account.account_id, repo.account_id);
    }

    #[tokio::test]
    async fn test_encrypter_failure_skips_the_store() {
        let encrypter = Arc::new(EncrypterStub::failing());
        let repo = Arc::new(AccountRepositoryStub::storing());
        let sut = AddAccountUseCase::new(encrypter, repo.clone());

        let err = sut.execute(input()).await.unwrap_err();

        assert!(matches!(err, AccountError::Encryption(_)));
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let encrypter = Arc::new(EncrypterStub::hashing());
        let repo = Arc::new(AccountRepositoryStub::failing());
        let sut = AddAccountUseCase::new(encrypter, repo);

        let err = sut.execute(input()).await.unwrap_err();

        assert!(matches!(err, AccountError::Internal(_)));
    }
}

// ============================================================================
// DTO tests
// ============================================================================

#[cfg(test)]
mod dto_tests {
    use crate::presentation::dto::{AccountResponse, SignUpRequest};

    #[test]
    fn test_absent_keys_parse_as_none() {
        let req: SignUpRequest = serde_json::from_str(r#"{"email":"any_email@mail.com"}"#).unwrap();

        assert!(req.name.is_none());
        assert_eq!(req.email.as_deref(), Some("any_email@mail.com"));
        assert!(req.password.is_none());
        assert!(req.password_confirmation.is_none());
    }

    #[test]
    fn test_camel_case_wire_names() {
        let req: SignUpRequest = serde_json::from_str(
            r#"{
                "name": "any name",
                "email": "any_email@mail.com",
                "password": "any_password",
                "passwordConfirmation": "any_password"
            }"#,
        )
        .unwrap();

        assert_eq!(req.password_confirmation.as_deref(), Some("any_password"));
    }

    #[test]
    fn test_response_serialization() {
        let body = AccountResponse {
            id: "valid_id".to_owned(),
            name: "valid_name".to_owned(),
            email: "valid_email".to_owned(),
            password: "valid_password".to_owned(),
        };

        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "valid_id",
                "name": "valid_name",
                "email": "valid_email",
                "password": "valid_password"
            })
        );
    }
}

// ============================================================================
// Error tests
// ============================================================================

#[cfg(test)]
mod error_tests {
    use crate::error::AccountError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AccountError, StatusCode)> = vec![
            (
                AccountError::MissingParam("name"),
                StatusCode::BAD_REQUEST,
            ),
            (
                AccountError::InvalidParam("email"),
                StatusCode::BAD_REQUEST,
            ),
            (
                AccountError::Validation("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AccountError::Encryption("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AccountError::Database(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AccountError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AccountError::MissingParam("name").to_string(),
            "Missing param: name"
        );
        assert_eq!(
            AccountError::InvalidParam("passwordConfirmation").to_string(),
            "Invalid param: passwordConfirmation"
        );
    }

    #[test]
    fn test_server_errors_expose_generic_detail_only() {
        let err = AccountError::Encryption("argon2 blew up".into());
        let app_err = err.to_app_error();

        assert_eq!(app_err.message(), "Internal server error");
        assert!(!app_err.to_string().contains("argon2"));
    }

    #[test]
    fn test_param_errors_expose_the_param() {
        let err = AccountError::MissingParam("email");
        assert_eq!(err.to_app_error().message(), "Missing param: email");
    }
}
