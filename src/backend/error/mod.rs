//! Backend Error Module
//!
//! This module defines the error type used by handlers and the
//! authentication service, and its conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse` from Axum, so handlers return
//! `Result<_, BackendError>` and every failure is converted at the handler
//! boundary. Nothing propagates to the transport layer uncaught.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, SERVER_ERROR_BODY};
