//! Request validation for the authentication endpoints.
//!
//! Checks run before any store access. All failing fields are reported
//! together, in field order. A field holding anything other than a JSON
//! string fails its check.

use serde_json::Value;

use crate::backend::auth::handlers::types::{LoginRequest, RegisterRequest};
use crate::shared::error::{FieldErrors, SharedError};

/// Maximum email length (RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;
const LOCAL_PART_MAX_LENGTH: usize = 64;
const DOMAIN_LABEL_MAX_LENGTH: usize = 63;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const INVALID_EMAIL_MSG: &str = "Please include a valid email";
pub const PASSWORD_REQUIRED_MSG: &str = "Password is required";
pub const NAME_REQUIRED_MSG: &str = "Name is required";
pub const PASSWORD_LENGTH_MSG: &str = "Please enter a password with 6 or more characters";

/// Login input that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Lowercased email
    pub email: String,
    pub password: String,
}

/// Registration input that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    /// Lowercased email
    pub email: String,
    pub password: String,
}

/// Syntactic email check
///
/// One `@`, a local part of permitted characters without leading, trailing
/// or doubled dots, and a dotted domain whose last label is alphabetic.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > EMAIL_MAX_LENGTH {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.len() > LOCAL_PART_MAX_LENGTH {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~.-".contains(c))
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= DOMAIN_LABEL_MAX_LENGTH
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    let tld = labels[labels.len() - 1];
    labels_ok && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Check the email field as submitted, recording a failure; returns the
/// lowercased email
fn check_email(errors: &mut FieldErrors, email: Option<&Value>) -> Option<String> {
    match email.and_then(Value::as_str) {
        Some(raw) if is_valid_email(raw) => Some(raw.to_lowercase()),
        _ => {
            errors.push("email", email, INVALID_EMAIL_MSG);
            None
        }
    }
}

/// Validate a login request: a syntactically valid email and a non-empty
/// password. No password policy is applied.
pub fn validate_login(request: &LoginRequest) -> Result<Credentials, SharedError> {
    let mut errors = FieldErrors::default();

    let email = check_email(&mut errors, request.email.as_ref());

    let password = request
        .password
        .as_ref()
        .and_then(Value::as_str)
        .filter(|p| !p.is_empty());
    if password.is_none() {
        errors.push("password", request.password.as_ref(), PASSWORD_REQUIRED_MSG);
    }

    errors.into_result()?;
    Ok(Credentials {
        email: email.unwrap_or_default(),
        password: password.unwrap_or_default().to_string(),
    })
}

/// Validate a registration request: a non-blank name, a valid email and a
/// password of at least `MIN_PASSWORD_LENGTH` characters.
pub fn validate_registration(request: &RegisterRequest) -> Result<Registration, SharedError> {
    let mut errors = FieldErrors::default();

    let name = request
        .name
        .as_ref()
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty());
    if name.is_none() {
        errors.push("name", request.name.as_ref(), NAME_REQUIRED_MSG);
    }

    let email = check_email(&mut errors, request.email.as_ref());

    let password = request
        .password
        .as_ref()
        .and_then(Value::as_str)
        .filter(|p| p.chars().count() >= MIN_PASSWORD_LENGTH);
    if password.is_none() {
        errors.push("password", request.password.as_ref(), PASSWORD_LENGTH_MSG);
    }

    errors.into_result()?;
    Ok(Registration {
        name: name.unwrap_or_default().to_string(),
        email: email.unwrap_or_default(),
        password: password.unwrap_or_default().to_string(),
    })
}
