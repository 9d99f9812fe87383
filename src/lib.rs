//! Authgate - Main Library
//!
//! Authgate is a small token-based authentication service built on Axum.
//! It validates user credentials against a credential store and issues
//! signed, stateless session tokens (JWT).
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not depend on the HTTP layer
//!   - Application configuration (`AppConfig`)
//!   - Field validation errors
//!
//! - **`backend`** - Server-side code
//!   - Axum router, handlers and the identity extractor
//!   - Credential store (Postgres and in-memory)
//!   - Token signing and verification
//!
//! # Usage
//!
//! ```rust,no_run
//! use authgate::backend::server::init::create_app;
//! use authgate::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Endpoints
//!
//! - `GET /api/auth` - Current user profile (requires a token)
//! - `POST /api/auth` - Login, returns `{ token }`
//! - `POST /api/users` - Registration, returns `{ token }`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
