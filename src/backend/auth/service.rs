/*!
 * Authentication Service
 *
 * `AuthService` holds the credential store and the session keys and
 * implements the three authentication operations:
 *
 * - `current_user` - profile for a verified token identity
 * - `login` - validate, look up, compare password, issue token
 * - `register` - validate, hash password, insert, issue token
 *
 * bcrypt work runs on the blocking pool so request tasks are never stalled
 * by a hash computation.
 */

use std::sync::Arc;

use crate::backend::auth::handlers::types::{LoginRequest, RegisterRequest};
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::users::{NewUser, StoreError, UserProfile, UserStore};
use crate::backend::auth::validation::{validate_login, validate_registration};
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthenticatedUser;

/// Authentication operations shared by every request
///
/// Cloning is cheap; clones share the store and keys.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    keys: Arc<SessionKeys>,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, keys: SessionKeys, bcrypt_cost: u32) -> Self {
        Self {
            store,
            keys: Arc::new(keys),
            bcrypt_cost,
        }
    }

    pub fn keys(&self) -> &SessionKeys {
        &self.keys
    }

    /// Look up the profile of an already-authenticated identity
    ///
    /// Returns `Ok(None)` when the token is valid but its user no longer
    /// exists.
    pub async fn current_user(
        &self,
        identity: &AuthenticatedUser,
    ) -> Result<Option<UserProfile>, BackendError> {
        let user = self.store.find_by_id(identity.user_id).await.map_err(|e| {
            tracing::error!("Database error loading user {}: {:?}", identity.user_id, e);
            e
        })?;

        if user.is_none() {
            tracing::warn!("Token for unknown user {}", identity.user_id);
        }

        Ok(user.map(UserProfile::from))
    }

    /// Check credentials and issue a session token
    ///
    /// Validation failures return before the store is touched.
    pub async fn login(&self, request: &LoginRequest) -> Result<String, BackendError> {
        let credentials = validate_login(request)?;

        let user = self
            .store
            .find_by_email(&credentials.email)
            .await
            .map_err(|e| {
                tracing::error!("Database error during login: {:?}", e);
                e
            })?
            .ok_or_else(|| {
                tracing::warn!("Login failed: user not found ({})", credentials.email);
                BackendError::InvalidCredentials
            })?;

        let matches = verify_password(credentials.password, user.password_hash.clone()).await?;
        if !matches {
            tracing::warn!("Login failed: invalid password for {}", credentials.email);
            return Err(BackendError::InvalidPassword);
        }

        let token = self.keys.sign(user.id)?;
        tracing::info!("User logged in: {}", user.id);
        Ok(token)
    }

    /// Create an account and issue a session token for it
    pub async fn register(&self, request: &RegisterRequest) -> Result<String, BackendError> {
        let registration = validate_registration(request)?;

        let existing = self.store.find_by_email(&registration.email).await?;
        if existing.is_some() {
            tracing::warn!("Registration for existing email {}", registration.email);
            return Err(BackendError::UserExists);
        }

        let password_hash = hash_password(registration.password, self.bcrypt_cost).await?;

        let user = self
            .store
            .insert(NewUser {
                name: registration.name,
                email: registration.email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                StoreError::Duplicate(email) => {
                    tracing::warn!("Registration raced on existing email {}", email);
                    BackendError::UserExists
                }
                other => {
                    tracing::error!("Failed to create user: {:?}", other);
                    BackendError::Store(other)
                }
            })?;

        let token = self.keys.sign(user.id)?;
        tracing::info!("User registered: {}", user.id);
        Ok(token)
    }
}

async fn verify_password(password: String, hash: String) -> Result<bool, BackendError> {
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(valid)
}

async fn hash_password(password: String, cost: u32) -> Result<String, BackendError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hash)
}
