/*!
 * Server Configuration
 *
 * This module turns an `AppConfig` into the services the server runs on,
 * choosing the credential store.
 *
 * # Store Selection
 *
 * - `DATABASE_URL` set: connect to Postgres and run migrations. Failure is
 *   returned to the caller and aborts startup.
 * - `DATABASE_URL` unset: warn and use the in-memory store. Accounts do not
 *   survive a restart.
 */

use std::sync::Arc;

use crate::backend::auth::store::{MemoryUserStore, PgUserStore};
use crate::backend::auth::users::{StoreError, UserStore};
use crate::shared::config::AppConfig;

/// Build the credential store described by the configuration
///
/// # Example
///
/// ```rust,no_run
/// use authgate::backend::server::config::load_store;
/// use authgate::shared::AppConfig;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AppConfig::from_env()?;
/// let store = load_store(&config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn load_store(config: &AppConfig) -> Result<Arc<dyn UserStore>, StoreError> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using in-memory user store.");
        return Ok(Arc::new(MemoryUserStore::new()));
    };

    let store = PgUserStore::connect(database_url).await.map_err(|e| {
        tracing::error!("Failed to initialize database: {:?}", e);
        e
    })?;

    Ok(Arc::new(store))
}
