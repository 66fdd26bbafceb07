//! Table Store Port
//!
//! Defines the storage abstraction for persisted limit-order rows.
//! Implemented by backend adapters; this crate ships only the in-memory one.

use async_trait::async_trait;
use thiserror::Error;

use super::limit_order_row::LimitOrderRow;

/// Errors that can occur in a table-store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row exists under the given composite key.
    #[error("No row for partition '{partition_key}', row key '{row_key}'")]
    NotFound {
        /// Partition key (client id).
        partition_key: String,
        /// Row key (order id).
        row_key: String,
    },

    /// Error raised by the storage backend.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Port for table-style storage of limit-order rows.
///
/// Rows are addressed by (partition key, row key) = (client id, order id).
/// Writes are full-record replaces at last-write-wins semantics; concurrency
/// discipline beyond that (ETags, retries) is the adapter's concern.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Fetch the row under the given composite key, if any.
    ///
    /// # Errors
    ///
    /// Returns error if the backend query fails.
    async fn get(
        &self,
        partition_key: &str,
        row_key: &str,
    ) -> Result<Option<LimitOrderRow>, StoreError>;

    /// Insert the row, or replace the existing row under the same key.
    ///
    /// # Errors
    ///
    /// Returns error if the backend write fails.
    async fn insert_or_replace(&self, row: LimitOrderRow) -> Result<(), StoreError>;

    /// Delete the row under the given composite key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no such row exists.
    async fn delete(&self, partition_key: &str, row_key: &str) -> Result<(), StoreError>;
}
