//! # Validation Module
//!
//! Request validation that runs before any ledger is touched.
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//! use till_core::validation::validate_price;
//!
//! assert!(validate_price(Money::from_minor(758)).is_ok());
//! assert!(validate_price(Money::from_minor(-1)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a transaction price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (the whole payment comes back as change)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}
