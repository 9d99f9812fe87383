/*!
 * Backend Error Types
 *
 * This module defines the error type returned by every handler and by the
 * authentication service.
 *
 * # Error Categories
 *
 * ## Validation errors
 *
 * Malformed email, missing password and similar. Reported as
 * `400 { "errors": [...] }` with one entry per field.
 *
 * ## Authentication errors
 *
 * Unknown email, wrong password, duplicate registration, missing or bad
 * token. Reported as `400`/`401 { "msg": "..." }`.
 *
 * ## Infrastructure errors
 *
 * Store, hashing, signing or task failures. Logged server-side with full
 * detail and reported as a plain-text `500 Server Error`.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::users::StoreError;
use crate::shared::error::{FieldError, SharedError};

/// Body sent for every infrastructure failure
pub const SERVER_ERROR_BODY: &str = "Server Error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use authgate::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::InvalidCredentials;
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// assert_eq!(err.message(), "Invalid Credentials");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// One or more request fields failed validation
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// No user is registered under the supplied email
    #[error("Invalid Credentials")]
    InvalidCredentials,

    /// The supplied password does not match the stored hash
    #[error("Invalid Password")]
    InvalidPassword,

    /// Registration for an email that is already taken
    #[error("User already exists")]
    UserExists,

    /// A protected route was called without a token
    #[error("No token, authorization denied")]
    MissingToken,

    /// The token is malformed, expired or signed with another secret
    #[error("Token is not valid")]
    InvalidToken,

    /// The request body could not be parsed
    #[error("{0}")]
    BadRequest(String),

    /// The credential store failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Token signing failed
    #[error("token signing error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing or comparison failed
    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// A blocking task panicked or was cancelled
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl BackendError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - Validation and authentication failures - 400 Bad Request
    /// - Missing or invalid token - 401 Unauthorized
    /// - Store, token, hash and task failures - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::InvalidCredentials
            | Self::InvalidPassword
            | Self::UserExists
            | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::MissingToken | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::Store(_) | Self::Token(_) | Self::Hash(_) | Self::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether this error is an infrastructure failure whose detail must not
    /// reach the client
    pub fn is_internal(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }

    /// The client-facing message
    ///
    /// Infrastructure errors always yield `Server Error`.
    pub fn message(&self) -> String {
        if self.is_internal() {
            SERVER_ERROR_BODY.to_string()
        } else {
            self.to_string()
        }
    }

    /// The per-field errors of a validation failure
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            Self::Validation(err) => Some(err.fields()),
            _ => None,
        }
    }
}
