/*!
 * Server Initialization
 *
 * This module handles the setup of the Axum application: store selection,
 * session keys, state creation and route configuration.
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::users::{StoreError, UserStore};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::shared::config::AppConfig;

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. **Load Store**: Postgres if `DATABASE_URL` is set, otherwise in-memory
/// 2. **Session Keys**: Derived once from the configured secret
/// 3. **Create Router**: Configures all routes and middleware
///
/// # Errors
///
/// Fails if a configured database cannot be reached or migrated.
pub async fn create_app(config: &AppConfig) -> Result<Router, StoreError> {
    tracing::info!("Initializing authgate server");

    let store = load_store(config).await?;
    let app = create_app_with_store(config, store);

    tracing::info!("Router configured");
    Ok(app)
}

/// Create the application around an existing credential store
///
/// Used by `create_app` and by tests that supply their own store.
pub fn create_app_with_store(config: &AppConfig, store: Arc<dyn UserStore>) -> Router {
    let keys = SessionKeys::new(&config.jwt_secret);
    let auth = AuthService::new(store, keys, config.bcrypt_cost);

    create_router(AppState::new(auth))
}
