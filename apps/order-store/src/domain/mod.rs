//! Domain Layer
//!
//! The in-memory order model consumed by the matching engine, with zero
//! storage dependencies.
//!
//! - [`LimitOrder`]: the live order held in the order book
//! - [`validation`]: fail-fast checks applied before registration and before
//!   converting rows read back from storage

pub mod errors;
pub mod limit_order;
pub mod validation;

pub use errors::DomainError;
pub use limit_order::LimitOrder;
