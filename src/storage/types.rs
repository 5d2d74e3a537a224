//! Storage types for database operations.
//!
//! This module defines the types stored in the database:
//! - [`StoredCalculation`]: One timing measurement
//! - [`StoredComment`]: One visitor comment
//!
//! Both are plain value records. Fields are opaque strings as stored; no
//! validation or normalization happens at this layer, and integrity is
//! whatever the database schema enforces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timing measurement stored in database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCalculation {
    /// Name of the measured page or task.
    pub name: String,
    /// Access time, stored as text.
    pub access_time: String,
    /// Elapsed time, stored as text.
    pub elapsed_time: String,
}

impl StoredCalculation {
    /// Create a new stored calculation.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        access_time: impl Into<String>,
        elapsed_time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            access_time: access_time.into(),
            elapsed_time: elapsed_time.into(),
        }
    }
}

/// Visitor comment stored in database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredComment {
    /// Name of the commenter.
    pub name: String,
    /// Access time, stored as text.
    pub access_time: String,
    /// Begin time, stored as text.
    pub begin_time: String,
    /// Comment content.
    pub content: String,
    /// Posting timestamp; comments list newest-first by this field.
    pub posted_at: DateTime<Utc>,
}

impl StoredComment {
    /// Create a new stored comment posted now.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        access_time: impl Into<String>,
        begin_time: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            access_time: access_time.into(),
            begin_time: begin_time.into(),
            content: content.into(),
            posted_at: Utc::now(),
        }
    }

    /// Set the posting timestamp.
    #[must_use]
    pub const fn with_posted_at(mut self, posted_at: DateTime<Utc>) -> Self {
        self.posted_at = posted_at;
        self
    }
}
