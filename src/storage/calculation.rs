//! Calculation record operations.

#![allow(clippy::missing_errors_doc)]

use crate::error::StorageError;
use sqlx::Row;

use super::core::SqliteStorage;
use super::types::StoredCalculation;

impl SqliteStorage {
    /// Insert a calculation record.
    ///
    /// Returns the number of affected rows (1 on success).
    pub async fn insert_calculation(
        &self,
        record: &StoredCalculation,
    ) -> Result<u64, StorageError> {
        let result =
            sqlx::query("INSERT INTO calculation (name, atime, elapsed_time) VALUES (?, ?, ?)")
                .bind(&record.name)
                .bind(&record.access_time)
                .bind(&record.elapsed_time)
                .execute(&self.pool)
                .await
                .map_err(|e| Self::query_error("INSERT calculation", format!("{e}")))?;

        Ok(result.rows_affected())
    }

    /// Get all calculation records, in database-returned order.
    ///
    /// An empty table yields an empty vector, not an error.
    pub async fn list_calculations(&self) -> Result<Vec<StoredCalculation>, StorageError> {
        let rows = sqlx::query("SELECT name, atime, elapsed_time FROM calculation")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT calculation", format!("{e}")))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(StoredCalculation {
                name: row.get("name"),
                access_time: row.get("atime"),
                elapsed_time: row.get("elapsed_time"),
            });
        }

        Ok(records)
    }

    /// Delete every calculation record.
    ///
    /// Returns the number of rows removed; 0 means the table was already
    /// empty, which is success.
    pub async fn clear_calculations(&self) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM calculation")
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error("DELETE calculation", format!("{e}")))?;

        Ok(result.rows_affected())
    }
}
