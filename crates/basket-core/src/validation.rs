//! # Validation Module
//!
//! Field validation for basket line items and tax configuration.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Line grammar (parser)                                        │
//! │  ├── Empty line check                                                  │
//! │  └── Regex shape: <quantity> <name> at <price>                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (called by LineItem::new)                        │
//! │  ├── quantity > 0                                                      │
//! │  ├── price >= 0                                                        │
//! │  └── name non-empty after trim                                         │
//! │                                                                         │
//! │  The grammar already excludes most of what Layer 2 rejects, but        │
//! │  LineItem::new is public and can be called without the parser.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field name reported for quantity failures.
pub const QUANTITY_FIELD: &str = "quantity";
/// Field name reported for price failures.
pub const PRICE_FIELD: &str = "price";
/// Field name reported for item name failures.
pub const NAME_FIELD: &str = "name";

/// Upper bound for a tax rate: 100%.
pub const MAX_TAX_RATE_BPS: u32 = 10_000;

impl ValidationError {
    /// Name of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::TooLarge { field } => field,
        }
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name and returns it trimmed.
///
/// ## Example
/// ```rust
/// use basket_core::validation::validate_item_name;
///
/// assert_eq!(validate_item_name("  music CD ").unwrap(), "music CD");
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<&str> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: NAME_FIELD.to_string(),
        });
    }

    Ok(name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: QUANTITY_FIELD.to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use basket_core::money::Money;
/// use basket_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1249)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: PRICE_FIELD.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_TAX_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: i64::from(MAX_TAX_RATE_BPS),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
