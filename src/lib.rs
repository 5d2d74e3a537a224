//! hitlog
//!
//! SQLite-backed persistence for two record types produced by a page-hit
//! logger:
//!
//! - **Calculation records**: timing measurements (name, access time,
//!   elapsed time), all fields opaque text.
//! - **Comment records**: visitor comments (name, access time, begin time,
//!   content, posted-at timestamp), listed newest-first.
//!
//! Each record type has exactly three operations: read-all, insert-one,
//! delete-all. There is no update and no delete-by-key.
//!
//! # Quick Start
//!
//! ```bash
//! DATABASE_PATH=./data/hitlog.db ./hitlog
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐      ┌─────────────────┐
//! │  caller /    │─────▶│  SqliteStorage  │──────▶ SQLite (pooled)
//! │  demo binary │◀─────│   (sqlx pool)   │
//! └──────────────┘      └─────────────────┘
//! ```
//!
//! A single [`storage::SqliteStorage`] owns the connection pool for the
//! process; every operation acquires from the pool and returns an explicit
//! `Result`, so "no rows" and "operation failed" are distinguishable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod storage;
