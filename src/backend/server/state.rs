/*!
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * `AppState` only holds `Arc`s to read-only keys and a `Send + Sync`
 * store, so it is cloned freely into every request.
 *
 * # Example
 *
 * ```rust
 * use authgate::backend::auth::AuthService;
 * use axum::extract::State;
 *
 * async fn handler(State(auth): State<AuthService>) {
 *     let _keys = auth.keys();
 * }
 * ```
 */

use axum::extract::FromRef;

use crate::backend::auth::service::AuthService;

/// Application state shared by all handlers
///
/// # Fields
///
/// * `auth` - Authentication service (credential store and session keys)
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
}

impl AppState {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }
}

/// Implement FromRef for AuthService
///
/// This allows handlers and the `AuthUser` extractor to take
/// `State<AuthService>` directly.
impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
