//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//! Handlers are thin: they extract the request, delegate to `AuthService`,
//! and let `BackendError` produce the error response.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`get_me`** - GET /api/auth - Get current user info
//! - **`login`** - POST /api/auth - User authentication
//! - **`signup`** - POST /api/users - User registration
//!
//! # Example
//!
//! ```rust,no_run
//! use authgate::backend::auth::handlers::{get_me, login, signup};
//! use authgate::backend::server::AppState;
//! use axum::{routing::{get, post}, Router};
//!
//! # fn example(state: AppState) {
//! let router: Router = Router::new()
//!     .route("/api/auth", get(get_me).post(login))
//!     .route("/api/users", post(signup))
//!     .with_state(state);
//! # }
//! ```

use axum::extract::rejection::JsonRejection;

use crate::backend::error::BackendError;

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginRequest, RegisterRequest, TokenResponse};

// Re-export handlers
pub use login::login;
pub use me::get_me;
pub use signup::signup;

/// Map a body that failed to parse as JSON to a 400 response
pub(crate) fn body_rejection(rejection: JsonRejection) -> BackendError {
    tracing::warn!("Rejected request body: {}", rejection.body_text());
    BackendError::BadRequest(rejection.body_text())
}
