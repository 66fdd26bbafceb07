//! Fail-fast validation for incoming limit orders.
//!
//! Conversion to and from persisted rows is deliberately total and performs no
//! validation; callers run these checks before registering an order. Checks
//! that need external reference data (asset-pair accuracy, minimum volumes,
//! fee configuration) belong to the engine's validators, not here.

use rust_decimal::Decimal;

use super::errors::DomainError;
use super::limit_order::LimitOrder;

/// Validate a limit order before registration.
///
/// # Errors
///
/// Returns `DomainError::InvalidValue` for a non-positive price, zero volume,
/// or a blank identity field.
pub fn validate_new_order(order: &LimitOrder) -> Result<(), DomainError> {
    require_non_blank("id", &order.id)?;
    require_non_blank("asset_pair_id", &order.asset_pair_id)?;
    require_non_blank("client_id", &order.client_id)?;

    if order.price <= Decimal::ZERO {
        return Err(DomainError::InvalidValue {
            field: "price".to_string(),
            message: "price must be positive".to_string(),
        });
    }
    if order.volume == Decimal::ZERO {
        return Err(DomainError::InvalidValue {
            field: "volume".to_string(),
            message: "volume must be non-zero".to_string(),
        });
    }
    Ok(())
}

fn require_non_blank(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidValue {
            field: field.to_string(),
            message: "must not be blank".to_string(),
        });
    }
    Ok(())
}
