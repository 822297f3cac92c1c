//! # Domain Types
//!
//! Core domain types for a shopping basket.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐            ┌─────────────────┐                 │
//! │  │      LineItem       │            │     TaxRate     │                 │
//! │  │  ─────────────────  │            │  ─────────────  │                 │
//! │  │  name               │            │  bps (u32)      │                 │
//! │  │  unit_price (Money) │            │  1000 = 10%     │                 │
//! │  │  quantity           │            │   500 = 5%      │                 │
//! │  │  ── derived ──      │            └─────────────────┘                 │
//! │  │  is_imported()      │                                                │
//! │  │  is_tax_exempt()    │                                                │
//! │  └─────────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Classification
//! Import and exemption status are never stored. They are keyword checks on
//! the lowercased name, re-evaluated on every call.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{
    validate_item_name, validate_price, validate_quantity, ValidationResult,
};

/// Marks an item as subject to import duty.
pub const IMPORTED_KEYWORD: &str = "imported";

/// Name fragments for books, food and medical products.
pub const EXEMPT_KEYWORDS: [&str; 3] = ["book", "chocolate", "pills"];

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (basic sales tax), 500 bps = 5% (import duty)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One line of a shopping basket: `<quantity> <name> at <unit price>`.
///
/// ## Invariants
/// - `quantity >= 1`
/// - `unit_price >= 0`
/// - `name` is trimmed and non-empty
///
/// Fields are private so a `LineItem` can only exist in a valid state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    name: String,
    unit_price: Money,
    quantity: i64,
}

impl LineItem {
    /// Builds a line item, checking quantity, then price, then name.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{LineItem, Money};
    ///
    /// let item = LineItem::new("  imported box of chocolates ", Money::from_cents(1000), 1).unwrap();
    /// assert_eq!(item.name(), "imported box of chocolates");
    /// assert!(item.is_imported());
    /// assert!(item.is_tax_exempt());
    ///
    /// assert!(LineItem::new("book", Money::from_cents(100), 0).is_err());
    /// ```
    pub fn new(name: impl AsRef<str>, unit_price: Money, quantity: i64) -> ValidationResult<Self> {
        validate_quantity(quantity)?;
        validate_price(unit_price)?;
        let name = validate_item_name(name.as_ref())?;

        Ok(LineItem {
            name: name.to_string(),
            unit_price,
            quantity,
        })
    }

    /// Builds a line item with the default quantity of one.
    pub fn single(name: impl AsRef<str>, unit_price: Money) -> ValidationResult<Self> {
        Self::new(name, unit_price, 1)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price of one unit, before tax.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// True when the name mentions "imported" (any case).
    pub fn is_imported(&self) -> bool {
        self.name.to_lowercase().contains(IMPORTED_KEYWORD)
    }

    /// True when the name mentions a book, chocolate or pills (any case).
    pub fn is_tax_exempt(&self) -> bool {
        let name = self.name.to_lowercase();
        EXEMPT_KEYWORDS.iter().any(|keyword| name.contains(keyword))
    }

    /// Unit price × quantity, before tax.
    pub fn line_total(&self) -> CoreResult<Money> {
        self.unit_price
            .checked_mul_quantity(self.quantity)
            .ok_or(CoreError::AmountOverflow {
                operation: "line total",
            })
    }
}

/// Renders `<quantity> <name>: <unit price>`, the pre-tax receipt shape.
impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.quantity, self.name, self.unit_price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
