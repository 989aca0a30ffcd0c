//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `FINCOMMUNITY` prefix
//! and `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use fincommunity::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::{AuthConfig, MIN_PRODUCTION_SECRET_BYTES};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

use crate::adapters::auth::JwtConfig;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Authentication configuration (JWT)
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FINCOMMUNITY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// - `FINCOMMUNITY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FINCOMMUNITY__DATABASE__URL=...` -> `database.url = ...`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FINCOMMUNITY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Settings for the JWT session validator.
    pub fn jwt_config(&self) -> JwtConfig {
        let mut jwt =
            JwtConfig::new(self.auth.jwt_secret.clone()).with_leeway_secs(self.auth.leeway_secs);
        if let Some(issuer) = &self.auth.issuer {
            jwt = jwt.with_issuer(issuer.clone());
        }
        if let Some(audience) = &self.auth.audience {
            jwt = jwt.with_audience(audience.clone());
        }
        jwt
    }
}
