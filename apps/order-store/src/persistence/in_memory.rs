//! In-memory table store for testing.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use super::limit_order_row::LimitOrderRow;
use super::table::{StoreError, TableStore};

type CompositeKey = (String, String);

/// In-memory implementation of [`TableStore`].
///
/// Suitable for testing and development. Not for production use.
#[derive(Debug, Default)]
pub struct InMemoryTableStore {
    rows: RwLock<HashMap<CompositeKey, LimitOrderRow>>,
}

impl InMemoryTableStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    /// Get the number of rows in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Clear all rows from the store.
    pub fn clear(&self) {
        self.write().clear();
    }

    // Lock poisoning only follows a panic in another holder.
    #[allow(clippy::unwrap_used)]
    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<CompositeKey, LimitOrderRow>> {
        self.rows.read().unwrap()
    }

    #[allow(clippy::unwrap_used)]
    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<CompositeKey, LimitOrderRow>> {
        self.rows.write().unwrap()
    }
}

#[async_trait]
impl TableStore for InMemoryTableStore {
    async fn get(
        &self,
        partition_key: &str,
        row_key: &str,
    ) -> Result<Option<LimitOrderRow>, StoreError> {
        let rows = self.read();
        Ok(rows
            .get(&(partition_key.to_string(), row_key.to_string()))
            .cloned())
    }

    async fn insert_or_replace(&self, row: LimitOrderRow) -> Result<(), StoreError> {
        let key = (
            row.order.partition_key().to_string(),
            row.order.row_key().to_string(),
        );
        debug!(partition_key = %key.0, row_key = %key.1, "storing limit-order row");
        self.write().insert(key, row);
        Ok(())
    }

    async fn delete(&self, partition_key: &str, row_key: &str) -> Result<(), StoreError> {
        let removed = self
            .write()
            .remove(&(partition_key.to_string(), row_key.to_string()));
        match removed {
            Some(_) => {
                debug!(partition_key, row_key, "deleted limit-order row");
                Ok(())
            }
            None => Err(StoreError::NotFound {
                partition_key: partition_key.to_string(),
                row_key: row_key.to_string(),
            }),
        }
    }
}
