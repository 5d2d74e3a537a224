//! Storage backend.
//!
//! This module provides:
//! - `SQLite` database implementation
//! - Calculation record operations (read-all, insert-one, delete-all)
//! - Comment record operations (read-all, insert-one, delete-all)
//!
//! # Architecture
//!
//! The storage layer uses `SQLite` with the `sqlx` crate for async
//! operations. A single pool is created at startup; every operation
//! acquires a connection from it and releases it on all exit paths,
//! including errors. Each statement runs in auto-commit mode.
//!
//! The implementation is split across submodules for maintainability:
//! - `core`: Pool management, migrations, and helper functions
//! - `calculation`: Calculation record operations
//! - `comment`: Comment record operations
//!
//! # Example
//!
//! ```ignore
//! use hitlog::storage::SqliteStorage;
//!
//! let storage = SqliteStorage::new("./data/hitlog.db", 5).await?;
//! let comments = storage.list_comments().await?;
//! ```

mod calculation;
mod comment;
mod core;
mod types;

pub use self::core::SqliteStorage;
pub use types::{StoredCalculation, StoredComment};
