//! The limit order held in the matching engine's order book.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A limit order: an instruction to trade at a specified price or better.
///
/// `volume` is signed; positive means buy, negative means sell. The order
/// accumulates one transaction id per match event, in match order, and
/// `remaining_volume` tracks the unmatched portion with the same sign
/// convention as `volume`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitOrder {
    /// Unique order identifier. Doubles as the storage row key.
    pub id: String,
    /// Instrument identifier (e.g. "BTCUSD").
    pub asset_pair_id: String,
    /// Owning client. Doubles as the storage partition key.
    pub client_id: String,
    /// Signed order volume: positive = buy, negative = sell.
    pub volume: Decimal,
    /// Limit price.
    pub price: Decimal,
    /// Lifecycle state label. Owned by the engine; opaque to the store.
    pub status: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Time the order was accepted by the engine.
    pub registered: DateTime<Utc>,
    /// Ordered transaction ids from match events. Duplicates allowed.
    pub transaction_ids: Vec<String>,
    /// Unmatched volume, same sign as `volume`. `None` on legacy records
    /// persisted before volume tracking existed.
    pub remaining_volume: Option<Decimal>,
    /// Time of the most recent match. `None` if never matched.
    pub last_match_time: Option<DateTime<Utc>>,
}

impl LimitOrder {
    /// Returns true if this is a buy order (positive volume).
    #[must_use]
    pub fn is_buy_side(&self) -> bool {
        self.volume > Decimal::ZERO
    }

    /// Unsigned order volume.
    #[must_use]
    pub fn abs_volume(&self) -> Decimal {
        self.volume.abs()
    }

    /// Unsigned remaining volume, if tracked.
    #[must_use]
    pub fn abs_remaining_volume(&self) -> Option<Decimal> {
        self.remaining_volume.map(|v| v.abs())
    }

    /// Append transaction ids from a match event, preserving order.
    pub fn append_transaction_ids<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.transaction_ids.extend(ids);
    }

    /// Record a match event: new remaining volume and match time.
    ///
    /// Returns the updated order, leaving `self` untouched. Rows written
    /// after a match are projected from the returned value.
    #[must_use]
    pub fn with_match(&self, remaining_volume: Decimal, matched_at: DateTime<Utc>) -> Self {
        Self {
            remaining_volume: Some(remaining_volume),
            last_match_time: Some(matched_at),
            ..self.clone()
        }
    }
}
