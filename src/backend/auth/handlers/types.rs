/*!
 * Authentication Handler Types
 *
 * Request and response bodies used by the login, registration and
 * current-user handlers.
 *
 * Request fields are kept as raw JSON values so that a missing or
 * wrongly-typed field is reported as a validation error rather than
 * rejected by the JSON extractor.
 */

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Login request
///
/// Contains the email and password for user authentication.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoginRequest {
    /// User's email address
    #[serde(default)]
    pub email: Option<Value>,
    /// User's password (verified against the stored hash)
    #[serde(default)]
    pub password: Option<Value>,
}

/// Registration request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RegisterRequest {
    /// Display name
    #[serde(default)]
    pub name: Option<Value>,
    /// User's email address
    #[serde(default)]
    pub email: Option<Value>,
    /// User's password (hashed before storage)
    #[serde(default)]
    pub password: Option<Value>,
}

/// Token response
///
/// Returned by login and registration.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    /// Signed session token (expires 360000 seconds after issuance)
    pub token: String,
}
