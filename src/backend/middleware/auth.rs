/*!
 * Authentication Extractor
 *
 * This module protects routes that require user authentication. It reads
 * the session token from the request headers, verifies it, and hands the
 * user id to the handler.
 *
 * # Token Location
 *
 * - `x-auth-token: <token>` (checked first)
 * - `Authorization: Bearer <token>`
 *
 * A missing token is rejected with `401 No token, authorization denied`,
 * a token that fails verification with `401 Token is not valid`.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::BackendError;

/// Header carrying the raw session token
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Authenticated user data extracted from the session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Find the session token in the request headers
///
/// Empty or whitespace-only values count as absent.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    fn non_empty(value: &str) -> Option<&str> {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    let header_token = headers
        .get(AUTH_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(non_empty);
    if header_token.is_some() {
        return header_token;
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .and_then(non_empty)
}

/// Verify the request's session token and return the identity it carries
///
/// Does not consult the credential store.
pub fn authenticate(
    keys: &SessionKeys,
    headers: &HeaderMap,
) -> Result<AuthenticatedUser, BackendError> {
    let token = extract_token(headers).ok_or_else(|| {
        tracing::warn!("Missing auth token");
        BackendError::MissingToken
    })?;

    let claims = keys.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        BackendError::InvalidToken
    })?;

    Ok(AuthenticatedUser {
        user_id: claims.user.id,
    })
}

/// Axum extractor for authenticated user
///
/// Use it as a handler parameter to require a valid session token. The
/// handler body only runs when verification succeeds.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AuthService: FromRef<S>,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthService::from_ref(state);
        let user = authenticate(auth.keys(), &parts.headers)?;
        Ok(AuthUser(user))
    }
}
