//! Authentication Module
//!
//! This module handles credential checking, registration and session tokens.
//! It provides HTTP handlers for the authentication endpoints, the
//! authentication service they delegate to, and the credential store.
//!
//! # Architecture
//!
//! - **`users`** - User model and the `UserStore` trait
//! - **`store`** - `UserStore` implementations (Postgres, in-memory)
//! - **`sessions`** - JWT token signing and verification
//! - **`validation`** - Request shape checks
//! - **`service`** - `AuthService`: login, current user, registration
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and store trait
//! ├── store/          - Store implementations
//! ├── sessions.rs     - JWT token management
//! ├── validation.rs   - Email and field checks
//! ├── service.rs      - Authentication service
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and password → user stored → token returned
//! 2. **Login**: email and password → validated → user looked up → password
//!    compared → token returned
//! 3. **Current user**: token verified by the `AuthUser` extractor → profile
//!    returned without the password hash
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless HS256 JWTs carrying only the user id
//! - Tokens expire 360000 seconds after issuance
//! - Unknown email and wrong password produce different messages
//!   (`Invalid Credentials` / `Invalid Password`)

/// User data model and store trait
pub mod users;

/// Credential store implementations
pub mod store;

/// JWT session token management
pub mod sessions;

/// Request validation
pub mod validation;

/// Authentication service
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, signup};
pub use service::AuthService;
pub use sessions::{Claims, SessionKeys, TokenUser, TOKEN_TTL_SECS};
pub use store::{MemoryUserStore, PgUserStore};
pub use users::{NewUser, StoreError, User, UserProfile, UserStore};
