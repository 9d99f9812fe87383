/*!
 * Login Handler
 *
 * This module implements the handler for POST /api/auth, which checks a
 * user's credentials and returns a session token.
 *
 * # Validation
 *
 * - `email` must be a syntactically valid address
 * - `password` must be present and non-empty
 *
 * Every failing field is reported in one `400 { "errors": [...] }`
 * response and the credential store is not consulted.
 */

use axum::{extract::rejection::JsonRejection, extract::State, response::Json};

use crate::backend::auth::handlers::body_rejection;
use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Login handler
///
/// # Arguments
///
/// * `State(auth)` - Authentication service
/// * `payload` - JSON body with `email` and `password`
///
/// # Errors
///
/// * `400 { errors }` - Validation failed
/// * `400 { msg: "Invalid Credentials" }` - No user with this email
/// * `400 { msg: "Invalid Password" }` - Password does not match
/// * `500 Server Error` - Store, hashing or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "password123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(auth): State<AuthService>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = payload.map_err(body_rejection)?;

    let token = auth.login(&request).await?;

    Ok(Json(TokenResponse { token }))
}
