//! Error types for hitlog.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`StorageError`]: Database operation errors
//! - [`ConfigError`]: Configuration errors
//!
//! All errors implement `Send + Sync` for async compatibility. Write
//! operations never report failure through a sentinel return value; a
//! failed operation is always an `Err`, so an `Ok(0)` from a delete-all
//! genuinely means "the table was already empty".

use thiserror::Error;

/// Top-level application error.
///
/// This is the main error type returned by public API functions.
/// It wraps all subsystem errors for unified error handling.
#[derive(Debug, Error)]
pub enum AppError {
    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Storage errors.
///
/// These errors represent failures in database operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Failed to connect to the database.
    #[error("Database connection failed: {message}")]
    ConnectionFailed {
        /// Description of the connection failure.
        message: String,
    },

    /// A database query failed.
    #[error("Query failed: {query} - {message}")]
    QueryFailed {
        /// The query that failed (may be truncated).
        query: String,
        /// Description of the failure.
        message: String,
    },

    /// Database migration failed.
    #[error("Migration failed: {version} - {message}")]
    MigrationFailed {
        /// The migration version that failed.
        version: String,
        /// Description of the failure.
        message: String,
    },

    /// Internal storage error.
    #[error("Internal storage error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    // Type assertions - verify all errors implement required traits
    assert_impl_all!(AppError: Send, Sync, std::error::Error);
    assert_impl_all!(StorageError: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(ConfigError: Send, Sync, std::error::Error, Clone);

    #[test]
    fn test_app_error_display_storage() {
        let err = AppError::Storage(StorageError::ConnectionFailed {
            message: "host not found".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Storage error: Database connection failed: host not found"
        );
    }

    #[test]
    fn test_app_error_display_config() {
        let err = AppError::Config(ConfigError::MissingRequired {
            var: "DATABASE_PATH".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required: DATABASE_PATH"
        );
    }

    #[test]
    fn test_app_error_from_storage_error() {
        let storage_err = StorageError::Internal {
            message: "unexpected".to_string(),
        };
        let app_err: AppError = storage_err.into();
        assert!(matches!(app_err, AppError::Storage(_)));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let config_err = ConfigError::MissingRequired {
            var: "TEST".to_string(),
        };
        let app_err: AppError = config_err.into();
        assert!(matches!(app_err, AppError::Config(_)));
    }

    #[test]
    fn test_storage_error_display_query_failed() {
        let err = StorageError::QueryFailed {
            query: "INSERT comment".to_string(),
            message: "syntax error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Query failed: INSERT comment - syntax error"
        );
    }

    #[test]
    fn test_storage_error_display_migration_failed() {
        let err = StorageError::MigrationFailed {
            version: "001".to_string(),
            message: "syntax error".to_string(),
        };
        assert_eq!(err.to_string(), "Migration failed: 001 - syntax error");
    }

    #[test]
    fn test_config_error_display_invalid_value() {
        let err = ConfigError::InvalidValue {
            var: "MAX_CONNECTIONS".to_string(),
            reason: "must be a positive integer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for MAX_CONNECTIONS: must be a positive integer"
        );
    }

    #[test]
    fn test_storage_error_eq() {
        let err1 = StorageError::QueryFailed {
            query: "SELECT calculation".to_string(),
            message: "a".to_string(),
        };
        let err2 = StorageError::QueryFailed {
            query: "SELECT calculation".to_string(),
            message: "a".to_string(),
        };
        let err3 = StorageError::QueryFailed {
            query: "SELECT calculation".to_string(),
            message: "b".to_string(),
        };
        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn test_config_error_clone() {
        let err = ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: "unknown level".to_string(),
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
