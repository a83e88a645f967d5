//! Syntactic Email Validation
//!
//! Basic format checks only - actual address verification is a delivery
//! concern, not a signup concern.

use crate::domain::validator::EmailValidator;
use crate::error::AccountResult;

/// Maximum length of the local part (per RFC 5321)
const LOCAL_MAX_LENGTH: usize = 64;

/// Split-based syntactic email validator
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxEmailValidator;

impl EmailValidator for SyntaxEmailValidator {
    fn is_valid(&self, email: &str) -> AccountResult<bool> {
        Ok(is_valid_format(email))
    }
}

fn is_valid_format(email: &str) -> bool {
    // Must contain exactly one @
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    // Local part checks
    if local.is_empty() || local.len() > LOCAL_MAX_LENGTH {
        return false;
    }

    // Domain checks
    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    // Check domain has valid characters
    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }

    // Domain shouldn't start or end with dot or hyphen
    if domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    if domain.starts_with('-') || domain.ends_with('-') {
        return false;
    }

    true
}
