//! Persistence Layer
//!
//! Flat row records for table-style storage backends and the port they are
//! written through.
//!
//! Rows are addressed by a two-part key: partition key = client id, row key =
//! order id. Backends only support scalar column values, so the ordered
//! transaction-id list is carried in a single delimited string column; the
//! [`transaction_ids`] module owns that encoding.

pub mod in_memory;
pub mod limit_order_row;
pub mod order_row;
pub mod table;
pub mod transaction_ids;

pub use in_memory::InMemoryTableStore;
pub use limit_order_row::LimitOrderRow;
pub use order_row::OrderRow;
pub use table::{StoreError, TableStore};
