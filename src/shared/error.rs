//! Shared Error Types
//!
//! Error types that do not depend on the HTTP layer.
//!
//! # Error Categories
//!
//! - `ValidationError` - One or more request fields failed validation
//!
//! # Usage
//!
//! ```rust
//! use authgate::shared::error::FieldErrors;
//! use serde_json::json;
//!
//! let mut errors = FieldErrors::default();
//! errors.push("email", Some(&json!("not-an-email")), "Please include a valid email");
//! assert!(errors.into_result().is_err());
//! ```
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Where a validated field was read from
const BODY_LOCATION: &str = "body";

/// A single field that failed validation
///
/// Serialized as `{ "value", "msg", "param", "location" }`. `value` is the
/// submitted JSON as sent, of any type, and is left out when the field was
/// absent from the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// The submitted value, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Human-readable error message
    pub msg: String,
    /// Name of the offending field
    pub param: String,
    /// Part of the request the field came from
    pub location: String,
}

impl FieldError {
    /// Create an error for a field of the request body
    pub fn body(param: impl Into<String>, value: Option<&Value>, msg: impl Into<String>) -> Self {
        Self {
            value: value.cloned(),
            msg: msg.into(),
            param: param.into(),
            location: BODY_LOCATION.to_string(),
        }
    }
}

/// Accumulates field errors while a request is checked
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Record a failing body field
    pub fn push(&mut self, param: &str, value: Option<&Value>, msg: &str) {
        self.0.push(FieldError::body(param, value, msg));
    }

    /// `Ok(())` when nothing was recorded, otherwise a `ValidationError`
    /// carrying every recorded field in insertion order
    pub fn into_result(self) -> Result<(), SharedError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(SharedError::ValidationError(self.0))
        }
    }
}

/// Shared error types
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Request validation failed on one or more fields
    #[error("Validation failed on {} field(s)", .0.len())]
    ValidationError(Vec<FieldError>),
}

impl SharedError {
    /// The failing fields of a validation error
    pub fn fields(&self) -> &[FieldError] {
        match self {
            Self::ValidationError(fields) => fields,
        }
    }
}
