//! Core `SQLite` storage implementation.
//!
//! This module provides the main [`SqliteStorage`] struct and core database
//! operations.

#![allow(clippy::missing_errors_doc)]

use crate::error::StorageError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// `SQLite` storage backend.
///
/// Provides persistent storage for calculation and comment records. The
/// pool is created once and shared; cloning is cheap and clones share the
/// same pool.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pub(crate) pool: SqlitePool,
}

impl SqliteStorage {
    /// Get a clone of the connection pool.
    ///
    /// Useful for creating additional storage instances that share the
    /// connection pool.
    #[must_use]
    pub fn get_pool(&self) -> SqlitePool {
        self.pool.clone()
    }

    /// Create a new `SQLite` storage instance.
    ///
    /// # Arguments
    ///
    /// * `database_path` - Path to the `SQLite` database file
    /// * `max_connections` - Pool size (see `MAX_CONNECTIONS` config)
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ConnectionFailed`] if the connection fails.
    pub async fn new(
        database_path: impl AsRef<Path>,
        max_connections: u32,
    ) -> Result<Self, StorageError> {
        let path = database_path.as_ref();

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to create database directory: {e}"),
            })?;
        }

        let options =
            SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", path.display()))
                .map_err(|e| StorageError::ConnectionFailed {
                    message: format!("Invalid database path: {e}"),
                })?
                .journal_mode(SqliteJournalMode::Wal)
                .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to connect to database: {e}"),
            })?;

        let storage = Self { pool };
        storage.run_migrations().await?;

        Ok(storage)
    }

    /// Create a new in-memory `SQLite` storage instance for testing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ConnectionFailed`] if the connection fails.
    pub async fn new_in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Invalid memory database options: {e}"),
            })?
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to create in-memory database: {e}"),
            })?;

        let storage = Self { pool };
        storage.run_migrations().await?;

        Ok(storage)
    }

    /// Run database migrations.
    ///
    /// Migrations are run in order. Each migration is idempotent (uses IF
    /// NOT EXISTS).
    pub(crate) async fn run_migrations(&self) -> Result<(), StorageError> {
        // Migration 001: Initial schema
        let schema_001 = include_str!("../../migrations/001_initial_schema.sql");
        sqlx::query(schema_001)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::MigrationFailed {
                version: "001".to_string(),
                message: format!("Failed to run migration 001: {e}"),
            })?;

        Ok(())
    }

    /// Parse a datetime string from the database.
    pub(crate) fn parse_datetime(s: &str) -> Result<DateTime<Utc>, StorageError> {
        s.parse::<DateTime<Utc>>()
            .map_err(|e| StorageError::Internal {
                message: format!("Failed to parse datetime '{s}': {e}"),
            })
    }

    /// Create a query error with the given query name and message.
    pub(crate) fn query_error(query: &str, message: String) -> StorageError {
        StorageError::QueryFailed {
            query: query.to_string(),
            message,
        }
    }
}
