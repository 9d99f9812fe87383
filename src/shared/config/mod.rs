//! Application configuration module
//!
//! Configuration is read once at startup from the process environment
//! (after loading `.env`, if present) and is read-only afterwards.
//!
//! | Variable       | Required | Default |
//! |----------------|----------|---------|
//! | `JWT_SECRET`   | yes      |         |
//! | `DATABASE_URL` | no       | in-memory store |
//! | `SERVER_PORT`  | no       | `5000`  |
//! | `BCRYPT_COST`  | no       | `10`    |

use std::fmt;

use thiserror::Error;

/// Default port the server listens on
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Default bcrypt work factor for newly registered passwords
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Accepted bcrypt work factors
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

const JWT_SECRET_VAR: &str = "JWT_SECRET";
const DATABASE_URL_VAR: &str = "DATABASE_URL";
const SERVER_PORT_VAR: &str = "SERVER_PORT";
const BCRYPT_COST_VAR: &str = "BCRYPT_COST";

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Secret used to sign and verify session tokens
    pub jwt_secret: String,
    /// Postgres connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Port the HTTP server binds to
    pub server_port: u16,
    /// bcrypt work factor used when hashing new passwords
    pub bcrypt_cost: u32,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("jwt_secret", &"<redacted>")
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("server_port", &self.server_port)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load the configuration from environment variables
    ///
    /// A missing or empty `JWT_SECRET` is an error: the server must not
    /// start without a signing secret.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(secret) = std::env::var(JWT_SECRET_VAR) {
            builder = builder.jwt_secret(secret);
        }

        if let Some(url) = std::env::var(DATABASE_URL_VAR).ok().filter(|url| !url.is_empty()) {
            builder = builder.database_url(url);
        }

        if let Ok(port) = std::env::var(SERVER_PORT_VAR) {
            let port = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue(SERVER_PORT_VAR, port))?;
            builder = builder.server_port(port);
        }

        if let Ok(cost) = std::env::var(BCRYPT_COST_VAR) {
            let cost = cost
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue(BCRYPT_COST_VAR, cost))?;
            builder = builder.bcrypt_cost(cost);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue(JWT_SECRET_VAR));
        }
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue(
                BCRYPT_COST_VAR,
                self.bcrypt_cost.to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    database_url: Option<String>,
    server_port: Option<u16>,
    bcrypt_cost: Option<u32>,
}

impl AppConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the server port
    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            jwt_secret: self
                .jwt_secret
                .ok_or(ConfigError::MissingValue(JWT_SECRET_VAR))?,
            database_url: self.database_url,
            server_port: self.server_port.unwrap_or(DEFAULT_SERVER_PORT),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
