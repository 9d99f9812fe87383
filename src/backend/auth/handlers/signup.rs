/*!
 * Signup Handler
 *
 * This module implements the handler for POST /api/users, which creates an
 * account and returns a session token for it.
 */

use axum::{extract::rejection::JsonRejection, extract::State, response::Json};

use crate::backend::auth::handlers::body_rejection;
use crate::backend::auth::handlers::types::{RegisterRequest, TokenResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Signup handler
///
/// # Validation
///
/// - `name` must be present and not blank
/// - `email` must be a syntactically valid address
/// - `password` must be at least 6 characters
///
/// # Errors
///
/// * `400 { errors }` - Validation failed
/// * `400 { msg: "User already exists" }` - Email already registered
/// * `500 Server Error` - Store, hashing or signing failure
pub async fn signup(
    State(auth): State<AuthService>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = payload.map_err(body_rejection)?;

    let token = auth.register(&request).await?;

    Ok(Json(TokenResponse { token }))
}
