//! Comment record operations.

#![allow(clippy::missing_errors_doc)]

use crate::error::StorageError;
use sqlx::Row;

use super::core::SqliteStorage;
use super::types::StoredComment;

impl SqliteStorage {
    /// Insert a comment record.
    ///
    /// Returns the number of affected rows (1 on success). The posting
    /// timestamp is stored as RFC 3339 text so that lexical and
    /// chronological order agree.
    pub async fn insert_comment(&self, record: &StoredComment) -> Result<u64, StorageError> {
        let result =
            sqlx::query("INSERT INTO comment (name, atime, btime, com, date) VALUES (?, ?, ?, ?, ?)")
                .bind(&record.name)
                .bind(&record.access_time)
                .bind(&record.begin_time)
                .bind(&record.content)
                .bind(record.posted_at.to_rfc3339())
                .execute(&self.pool)
                .await
                .map_err(|e| Self::query_error("INSERT comment", format!("{e}")))?;

        Ok(result.rows_affected())
    }

    /// Get all comment records, newest first.
    ///
    /// An empty table yields an empty vector, not an error.
    pub async fn list_comments(&self) -> Result<Vec<StoredComment>, StorageError> {
        let rows =
            sqlx::query("SELECT name, atime, btime, com, date FROM comment ORDER BY date DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| Self::query_error("SELECT comment", format!("{e}")))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let posted_at_str: String = row.get("date");
            records.push(StoredComment {
                name: row.get("name"),
                access_time: row.get("atime"),
                begin_time: row.get("btime"),
                content: row.get("com"),
                posted_at: Self::parse_datetime(&posted_at_str)?,
            });
        }

        Ok(records)
    }

    /// Delete every comment record.
    ///
    /// Returns the number of rows removed; 0 means the table was already
    /// empty, which is success.
    pub async fn clear_comments(&self) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM comment")
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error("DELETE comment", format!("{e}")))?;

        Ok(result.rows_affected())
    }
}
