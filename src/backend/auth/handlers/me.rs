/*!
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth, which returns the
 * profile of the user the session token was issued to.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::service::AuthService;
use crate::backend::auth::users::UserProfile;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;

/// Get current user handler
///
/// The `AuthUser` extractor has already verified the token, so this only
/// loads the profile. A token for a user that no longer exists yields
/// `200 null`.
///
/// # Errors
///
/// * `401 { msg }` - Token missing or invalid (from the extractor)
/// * `500 Server Error` - Store failure
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "name": "Ada",
///   "email": "user@example.com",
///   "created_at": "2024-01-01T00:00:00Z"
/// }
/// ```
pub async fn get_me(
    State(auth): State<AuthService>,
    AuthUser(identity): AuthUser,
) -> Result<Json<Option<UserProfile>>, BackendError> {
    let profile = auth.current_user(&identity).await?;
    Ok(Json(profile))
}
