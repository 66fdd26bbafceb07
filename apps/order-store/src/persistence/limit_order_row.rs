//! Persisted limit-order row and its domain conversions.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::limit_order::LimitOrder;

use super::order_row::OrderRow;

/// The persisted form of a [`LimitOrder`].
///
/// Embeds the common [`OrderRow`] columns and adds the two fields that track
/// live match state. A row is built either from raw column values read back
/// from storage ([`LimitOrderRow::new`]) or by projecting the live domain
/// order just before a write ([`LimitOrderRow::from_domain`]). Updates are
/// full-record replaces of a freshly projected row; the row itself is never
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitOrderRow {
    /// Columns common to all persisted orders.
    #[serde(flatten)]
    pub order: OrderRow,
    /// Unmatched volume, same sign convention as `volume`. `None` on legacy
    /// rows persisted before volume tracking existed.
    pub remaining_volume: Option<Decimal>,
    /// Time of the most recent match. `None` if never matched.
    pub last_match_time: Option<DateTime<Utc>>,
}

impl LimitOrderRow {
    /// Build a row from raw column values.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        order_id: String,
        asset_pair_id: String,
        client_id: String,
        volume: Decimal,
        price: Decimal,
        status: String,
        created_at: DateTime<Utc>,
        registered: DateTime<Utc>,
        transaction_id: Option<String>,
        remaining_volume: Option<Decimal>,
        last_match_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            order: OrderRow {
                order_id,
                asset_pair_id,
                client_id,
                volume,
                price,
                status,
                created_at,
                registered,
                transaction_id,
            },
            remaining_volume,
            last_match_time,
        }
    }

    /// Project a live domain order into its persisted form.
    ///
    /// Every carried field is copied verbatim, including the full ordered
    /// transaction-id list; the domain order is not touched. The order id is
    /// propagated unchanged and becomes the row key.
    #[must_use]
    pub fn from_domain(order: &LimitOrder) -> Self {
        let mut row = Self::new(
            order.id.clone(),
            order.asset_pair_id.clone(),
            order.client_id.clone(),
            order.volume,
            order.price,
            order.status.clone(),
            order.created_at,
            order.registered,
            None,
            order.remaining_volume,
            order.last_match_time,
        );
        row.order
            .append_transaction_ids(order.transaction_ids.iter().cloned());
        row
    }

    /// Reconstruct the domain order this row was projected from.
    ///
    /// Exact inverse of [`from_domain`](Self::from_domain) for every field
    /// the row carries: `to_domain(&from_domain(&o)) == o`.
    #[must_use]
    pub fn to_domain(&self) -> LimitOrder {
        LimitOrder {
            id: self.order.order_id.clone(),
            asset_pair_id: self.order.asset_pair_id.clone(),
            client_id: self.order.client_id.clone(),
            volume: self.order.volume,
            price: self.order.price,
            status: self.order.status.clone(),
            created_at: self.order.created_at,
            registered: self.order.registered,
            transaction_ids: self.order.transaction_ids(),
            remaining_volume: self.remaining_volume,
            last_match_time: self.last_match_time,
        }
    }

    /// Unsigned remaining volume.
    ///
    /// `None` when the row does not track remaining volume (legacy records);
    /// callers that have established nullability unwrap at their level.
    #[must_use]
    pub fn abs_remaining_volume(&self) -> Option<Decimal> {
        self.remaining_volume.map(|v| v.abs())
    }

    /// Check that the required columns of a row read back from storage are
    /// populated.
    ///
    /// Conversion itself is total and never validates; storage readers call
    /// this before [`to_domain`](Self::to_domain) to fail fast on truncated
    /// rows.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IncompleteRow` for a blank required column and
    /// `DomainError::InvalidValue` for a negative price.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (column, value) in [
            ("RowKey", &self.order.order_id),
            ("PartitionKey", &self.order.client_id),
            ("AssetPairId", &self.order.asset_pair_id),
            ("Status", &self.order.status),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::IncompleteRow {
                    column: column.to_string(),
                    row_key: self.order.order_id.clone(),
                });
            }
        }
        if self.order.price < Decimal::ZERO {
            return Err(DomainError::InvalidValue {
                field: "price".to_string(),
                message: "price must be non-negative".to_string(),
            });
        }
        Ok(())
    }
}

// Diagnostic dump, not parseable and not stable across versions.
impl fmt::Display for LimitOrderRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LimitOrderRow {{ asset_pair_id: '{}', client_id: '{}', volume: {}, price: {}, \
             remaining_volume: {:?}, status: '{}', created_at: {}, registered: {}, \
             transaction_id: {:?}, last_match_time: {:?} }}",
            self.order.asset_pair_id,
            self.order.client_id,
            self.order.volume,
            self.order.price,
            self.remaining_volume,
            self.order.status,
            self.order.created_at,
            self.order.registered,
            self.order.transaction_id,
            self.last_match_time,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
    }

    fn t1() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 1).unwrap()
    }

    fn make_order() -> LimitOrder {
        LimitOrder {
            id: "ord-1".to_string(),
            asset_pair_id: "BTCUSD".to_string(),
            client_id: "c-1".to_string(),
            volume: dec!(1.5),
            price: dec!(9000.0),
            status: "InOrderBook".to_string(),
            created_at: t0(),
            registered: t1(),
            transaction_ids: vec!["tx-1".to_string(), "tx-2".to_string()],
            remaining_volume: Some(dec!(1.5)),
            last_match_time: None,
        }
    }

    #[test]
    fn from_domain_encodes_transaction_ids() {
        let row = LimitOrderRow::from_domain(&make_order());
        assert_eq!(row.order.transaction_id.as_deref(), Some("tx-1,tx-2"));
    }

    #[test]
    fn from_domain_copies_keys() {
        let row = LimitOrderRow::from_domain(&make_order());
        assert_eq!(row.order.partition_key(), "c-1");
        assert_eq!(row.order.row_key(), "ord-1");
    }

    #[test]
    fn roundtrip_is_field_equal() {
        let order = make_order();
        let restored = LimitOrderRow::from_domain(&order).to_domain();
        assert_eq!(restored, order);
    }

    #[test]
    fn roundtrip_preserves_null_remaining_volume() {
        let mut order = make_order();
        order.remaining_volume = None;

        let restored = LimitOrderRow::from_domain(&order).to_domain();

        assert_eq!(restored.remaining_volume, None);
    }

    #[test]
    fn roundtrip_preserves_last_match_time() {
        let mut order = make_order();
        order.last_match_time = Some(t1());

        let restored = LimitOrderRow::from_domain(&order).to_domain();

        assert_eq!(restored.last_match_time, Some(t1()));
    }

    #[test]
    fn roundtrip_empty_transaction_ids() {
        let mut order = make_order();
        order.transaction_ids.clear();

        let row = LimitOrderRow::from_domain(&order);

        assert_eq!(row.order.transaction_id, None);
        assert!(row.to_domain().transaction_ids.is_empty());
    }

    #[test]
    fn from_domain_does_not_mutate_source() {
        let order = make_order();
        let copy = order.clone();
        let _ = LimitOrderRow::from_domain(&order);
        assert_eq!(order, copy);
    }

    #[test_case(dec!(-5.25), dec!(5.25) ; "negative sell remainder")]
    #[test_case(dec!(0), dec!(0) ; "zero")]
    #[test_case(dec!(1.5), dec!(1.5) ; "positive buy remainder")]
    fn abs_remaining_volume(remaining: Decimal, expected: Decimal) {
        let mut row = LimitOrderRow::from_domain(&make_order());
        row.remaining_volume = Some(remaining);
        assert_eq!(row.abs_remaining_volume(), Some(expected));
    }

    #[test]
    fn abs_remaining_volume_none_for_legacy_row() {
        let mut row = LimitOrderRow::from_domain(&make_order());
        row.remaining_volume = None;
        assert_eq!(row.abs_remaining_volume(), None);
    }

    #[test]
    fn validate_accepts_complete_row() {
        assert!(LimitOrderRow::from_domain(&make_order()).validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_required_column() {
        let mut row = LimitOrderRow::from_domain(&make_order());
        row.order.asset_pair_id = String::new();
        let err = row.validate().unwrap_err();
        assert!(
            matches!(err, DomainError::IncompleteRow { ref column, .. } if column == "AssetPairId")
        );
    }

    #[test]
    fn validate_rejects_negative_price() {
        let mut row = LimitOrderRow::from_domain(&make_order());
        row.order.price = dec!(-1);
        assert!(row.validate().is_err());
    }

    #[test]
    fn display_enumerates_every_field() {
        let mut order = make_order();
        order.last_match_time = Some(t1());
        let text = LimitOrderRow::from_domain(&order).to_string();

        for label in [
            "asset_pair_id",
            "client_id",
            "volume",
            "price",
            "remaining_volume",
            "status",
            "created_at",
            "registered",
            "transaction_id",
            "last_match_time",
        ] {
            assert!(text.contains(label), "missing {label} in {text}");
        }
        assert!(text.contains("BTCUSD"));
        assert!(text.contains("tx-1,tx-2"));
    }

    #[test]
    fn serde_row_roundtrip() {
        let row = LimitOrderRow::from_domain(&make_order());
        let json = serde_json::to_string(&row).unwrap();
        let parsed: LimitOrderRow = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, row);
    }
}
