// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value
    )
)]

//! Order Store - Persisted Order Layer
//!
//! Persisted representation of limit orders for the matching engine, and the
//! lossless conversion between that representation and the in-memory domain
//! order.
//!
//! The persisted form is a flat record addressed by a two-part key
//! (partition key = client id, row key = order id) and targets table-style
//! backends that only support scalar column values. The ordered list of
//! transaction ids an order has participated in is carried inside a single
//! delimited string column; [`persistence::transaction_ids`] owns that
//! encoding.
//!
//! # Layers
//!
//! - **Domain** (`domain`): the [`domain::LimitOrder`] type consumed by the
//!   order book, plus input validation.
//! - **Persistence** (`persistence`): [`persistence::OrderRow`] /
//!   [`persistence::LimitOrderRow`] records, the `from_domain`/`to_domain`
//!   conversion pair, and the [`persistence::TableStore`] port implemented by
//!   storage adapters.
//!
//! Conversions are pure and synchronous; all I/O lives behind the
//! [`persistence::TableStore`] trait.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod domain;
pub mod persistence;

pub use domain::{DomainError, LimitOrder};
pub use persistence::{InMemoryTableStore, LimitOrderRow, OrderRow, StoreError, TableStore};
