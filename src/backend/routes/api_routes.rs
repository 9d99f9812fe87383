/*!
 * API Routes
 *
 * This module mounts the authentication endpoints.
 *
 * # Routes
 *
 * ## Authentication
 * - `GET /api/auth` - Get current user info (requires token)
 * - `POST /api/auth` - User login
 *
 * ## Users
 * - `POST /api/users` - User registration
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, signup};
use crate::backend::server::state::AppState;

/// Prefix under which the authentication routes are served
pub const AUTH_PATH: &str = "/api/auth";

/// Path of the registration route
pub const USERS_PATH: &str = "/api/users";

/// Configure API routes
///
/// # Authentication
///
/// `GET /api/auth` takes the `AuthUser` extractor and requires a token in
/// `x-auth-token` or `Authorization: Bearer`. The POST routes are public.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(AUTH_PATH, get(get_me).post(login))
        .route(USERS_PATH, post(signup))
}
