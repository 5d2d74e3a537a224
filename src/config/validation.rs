//! Configuration validation.
//!
//! This module provides validation logic for configuration values,
//! ensuring they are within acceptable ranges.

use super::Config;
use crate::error::ConfigError;

/// Minimum allowed pool size.
pub const MIN_POOL_CONNECTIONS: u32 = 1;

/// Maximum allowed pool size.
pub const MAX_POOL_CONNECTIONS: u32 = 64;

/// Recognized log levels.
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if any value is out of range:
/// - `DATABASE_PATH` must not be empty
/// - `LOG_LEVEL` must be one of error, warn, info, debug, trace
/// - `MAX_CONNECTIONS` must be between 1 and 64
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.database_path.is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "DATABASE_PATH".into(),
            reason: "must not be empty".into(),
        });
    }

    if !LOG_LEVELS.contains(&config.log_level.as_str()) {
        return Err(ConfigError::InvalidValue {
            var: "LOG_LEVEL".into(),
            reason: format!("must be one of {}", LOG_LEVELS.join(", ")),
        });
    }

    if config.max_connections < MIN_POOL_CONNECTIONS
        || config.max_connections > MAX_POOL_CONNECTIONS
    {
        return Err(ConfigError::InvalidValue {
            var: "MAX_CONNECTIONS".into(),
            reason: format!(
                "must be between {MIN_POOL_CONNECTIONS} and {MAX_POOL_CONNECTIONS}"
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn create_valid_config() -> Config {
        Config {
            database_path: "./data/hitlog.db".to_string(),
            log_level: "info".to_string(),
            max_connections: 5,
        }
    }

    #[test]
    fn test_valid_config() {
        let config = create_valid_config();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_database_path() {
        let mut config = create_valid_config();
        config.database_path = String::new();
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var, .. } if var == "DATABASE_PATH"));
    }

    #[test]
    fn test_unknown_log_level() {
        let mut config = create_valid_config();
        config.log_level = "verbose".to_string();
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var, .. } if var == "LOG_LEVEL"));
    }

    #[test]
    fn test_pool_size_too_low() {
        let mut config = create_valid_config();
        config.max_connections = 0;
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var, .. } if var == "MAX_CONNECTIONS"));
    }

    #[test]
    fn test_pool_size_too_high() {
        let mut config = create_valid_config();
        config.max_connections = 65;
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var, .. } if var == "MAX_CONNECTIONS"));
    }

    #[test]
    fn test_boundary_pool_size_min() {
        let mut config = create_valid_config();
        config.max_connections = MIN_POOL_CONNECTIONS;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_boundary_pool_size_max() {
        let mut config = create_valid_config();
        config.max_connections = MAX_POOL_CONNECTIONS;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_all_log_levels_accepted() {
        for level in ["error", "warn", "info", "debug", "trace"] {
            let mut config = create_valid_config();
            config.log_level = level.to_string();
            assert!(validate_config(&config).is_ok(), "level {level} rejected");
        }
    }
}
