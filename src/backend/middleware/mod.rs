//! Middleware Module
//!
//! This module contains request processing that runs before handlers.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - The `AuthUser` extractor protecting routes that need a
//!   valid session token
//!
//! # Example
//!
//! ```rust,no_run
//! use authgate::backend::middleware::AuthUser;
//!
//! async fn whoami(AuthUser(user): AuthUser) -> String {
//!     user.user_id.to_string()
//! }
//! ```

pub mod auth;

pub use auth::{authenticate, extract_token, AuthUser, AuthenticatedUser, AUTH_TOKEN_HEADER};
