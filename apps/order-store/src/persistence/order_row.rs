//! Common persisted columns shared by all order kinds.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transaction_ids;

/// The columns every persisted order carries.
///
/// Concrete order rows embed this struct; there is no dispatch over order
/// kinds at this layer. Addressing follows the table backend's composite key:
/// `client_id` is the partition key, `order_id` the row key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRow {
    /// Unique order identifier. Storage row key.
    pub order_id: String,
    /// Instrument identifier.
    pub asset_pair_id: String,
    /// Owning client. Storage partition key.
    pub client_id: String,
    /// Signed order volume: positive = buy, negative = sell.
    pub volume: Decimal,
    /// Limit price.
    pub price: Decimal,
    /// Lifecycle state label, stored opaquely.
    pub status: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time the order was accepted by the engine.
    pub registered: DateTime<Utc>,
    /// Encoded ordered transaction-id list (see
    /// [`transaction_ids`](super::transaction_ids)). `None` means no ids.
    pub transaction_id: Option<String>,
}

impl OrderRow {
    /// The partition key this row is addressed under.
    #[must_use]
    pub fn partition_key(&self) -> &str {
        &self.client_id
    }

    /// The row key this row is addressed under.
    #[must_use]
    pub fn row_key(&self) -> &str {
        &self.order_id
    }

    /// Append transaction ids, in order, to the encoded column.
    ///
    /// The current column value is decoded, the new ids appended, and the
    /// combined list re-encoded, so previously stored ids are never
    /// disturbed.
    pub fn append_transaction_ids<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut all = self.transaction_ids();
        all.extend(ids);
        self.transaction_id = if all.is_empty() {
            None
        } else {
            Some(transaction_ids::encode(&all))
        };
    }

    /// Decode the encoded column into its ordered id list.
    ///
    /// Pure read; a `None` or empty column yields an empty list.
    #[must_use]
    pub fn transaction_ids(&self) -> Vec<String> {
        self.transaction_id
            .as_deref()
            .map(transaction_ids::decode)
            .unwrap_or_default()
    }
}
