//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, tracing layer and fallback
//! - **`api_routes`** - Authentication and registration endpoints
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint routes
//! ```
//!
//! # API Routes
//!
//! - `GET /api/auth` - Get current user (requires token)
//! - `POST /api/auth` - Login
//! - `POST /api/users` - Registration
//!
//! Everything else falls through to a `404 Not Found`.

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
