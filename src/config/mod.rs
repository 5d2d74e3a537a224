//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading
//! - Configuration validation
//! - Default value handling
//!
//! Configuration is loaded once at startup and passed explicitly; nothing
//! re-reads the environment after [`Config::from_env`] returns.
//!
//! # Example
//!
//! ```
//! use hitlog::config::{Config, DEFAULT_MAX_CONNECTIONS};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     database_path: "./data/hitlog.db".to_string(),
//!     log_level: "info".to_string(),
//!     max_connections: DEFAULT_MAX_CONNECTIONS,
//! };
//!
//! println!("Database at: {}", config.database_path);
//! ```

mod validation;

pub use validation::{validate_config, MAX_POOL_CONNECTIONS, MIN_POOL_CONNECTIONS};

use crate::error::ConfigError;

/// Default database path.
pub const DEFAULT_DATABASE_PATH: &str = "./data/hitlog.db";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default connection pool size.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Application configuration.
///
/// This struct holds all configuration values for hitlog.
/// Use [`Config::from_env`] to load configuration from environment
/// variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the `SQLite` database file.
    pub database_path: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Maximum number of pooled database connections.
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional (with defaults):
    /// - `DATABASE_PATH`: Path to `SQLite` database (default: `./data/hitlog.db`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `MAX_CONNECTIONS`: Pool size (default: `5`)
    ///
    /// A `.env` file in the working directory is honored if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `MAX_CONNECTIONS` is not a valid positive integer
    /// - Any value fails validation (see [`validate_config`])
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let database_path =
            std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.into());

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let max_connections = parse_env_u32("MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        let config = Self {
            database_path,
            log_level,
            max_connections,
        };

        validate_config(&config)?;
        Ok(config)
    }
}

/// Parse an environment variable as u32, using a default if not set.
fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}
