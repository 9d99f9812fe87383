//! Credential Store Implementations
//!
//! - **`postgres`** - `PgUserStore`, backed by a sqlx `PgPool`
//! - **`memory`** - `MemoryUserStore`, used when no database is configured
//!   and by the test suite

/// Postgres-backed store
pub mod postgres;

/// In-memory store
pub mod memory;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;
