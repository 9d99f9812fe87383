//! Shared Module
//!
//! Types that are independent of the HTTP layer: configuration and the
//! per-field validation errors reported back to clients.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::{FieldError, SharedError};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
