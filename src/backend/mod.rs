//! Backend Module
//!
//! All server-side code for Authgate: an Axum HTTP server exposing login,
//! registration and current-user endpoints backed by a credential store.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, store loading
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, token signing, authentication service
//! - **`middleware`** - Identity extraction for protected routes
//! - **`error`** - Backend error type and its HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request identity extraction
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers share an `AppState` holding the `AuthService`. The service owns
//! the credential store behind `Arc<dyn UserStore>` and the signing keys
//! behind `Arc<SessionKeys>`; both are read-only after startup, so requests
//! run concurrently without coordination.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. `BackendError` implements
//! `IntoResponse`, so every failure is turned into a status code and body at
//! the handler boundary. Infrastructure failures are logged and answered
//! with an opaque `Server Error`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use server::create_app;
pub use error::BackendError;
pub use auth::{AuthService, SessionKeys, UserStore};
