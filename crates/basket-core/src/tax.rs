//! # Tax Engine
//!
//! Basic sales tax and import duty for a single unit price.
//!
//! ## Tax Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   basic tax   = exempt?   0 : round_up_to_nickel(price × 10%)          │
//! │   import duty = imported? round_up_to_nickel(price × 5%) : 0           │
//! │   total tax   = basic tax + import duty                                │
//! │                                                                         │
//! │   Each part is rounded on its own BEFORE the sum.                      │
//! │                                                                         │
//! │   imported bottle of perfume at 47.50                                  │
//! │     basic  4.75   → 4.75                                               │
//! │     duty   2.375  → 2.40                                               │
//! │     total         = 7.15                                               │
//! │                                                                         │
//! │   imported bottle of nail polish at 0.01                               │
//! │     basic  0.001  → 0.05                                               │
//! │     duty   0.0005 → 0.05                                               │
//! │     total         = 0.10   (rounding the sum would give 0.05)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::config::TaxConfig;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{LineItem, TaxRate};

/// Computes taxes from the rates in its [`TaxConfig`].
///
/// Every method is a pure function of its arguments and the config. Amounts
/// too large for the decimal range come back as
/// [`CoreError::AmountOverflow`] instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaxEngine {
    config: TaxConfig,
}

impl TaxEngine {
    /// Engine with the standard 10% basic rate and 5% import duty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom rates. Rates above 100% are rejected.
    pub fn with_config(config: TaxConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(TaxEngine { config })
    }

    /// The rates this engine applies.
    pub fn rates(&self) -> TaxConfig {
        self.config
    }

    /// Rounds `amount` up to the nearest 0.05.
    pub fn round_up_to_nickel(amount: Money) -> CoreResult<Money> {
        amount
            .round_up_to_nickel()
            .ok_or(CoreError::AmountOverflow {
                operation: "nickel rounding",
            })
    }

    pub fn basic_tax(&self, price: Money, is_exempt: bool) -> CoreResult<Money> {
        if is_exempt {
            return Ok(Money::zero());
        }
        apply_rate(price, self.config.basic_rate, "basic sales tax")
    }

    pub fn import_duty(&self, price: Money, is_imported: bool) -> CoreResult<Money> {
        if !is_imported {
            return Ok(Money::zero());
        }
        apply_rate(price, self.config.import_duty_rate, "import duty")
    }

    /// Basic tax plus import duty, each rounded separately.
    pub fn total_tax(&self, price: Money, is_exempt: bool, is_imported: bool) -> CoreResult<Money> {
        let basic = self.basic_tax(price, is_exempt)?;
        let duty = self.import_duty(price, is_imported)?;
        basic.checked_add(duty).ok_or(CoreError::AmountOverflow {
            operation: "total tax",
        })
    }

    /// Tax on one unit of `item`, using the flags derived from its name.
    pub fn tax_for_item(&self, item: &LineItem) -> CoreResult<Money> {
        self.total_tax(item.unit_price(), item.is_tax_exempt(), item.is_imported())
    }

    /// `price` plus its total tax.
    pub fn final_price(&self, price: Money, is_exempt: bool, is_imported: bool) -> CoreResult<Money> {
        let tax = self.total_tax(price, is_exempt, is_imported)?;
        price.checked_add(tax).ok_or(CoreError::AmountOverflow {
            operation: "final price",
        })
    }
}

fn apply_rate(price: Money, rate: TaxRate, operation: &'static str) -> CoreResult<Money> {
    price
        .apply_rate_rounded_up(rate)
        .ok_or(CoreError::AmountOverflow { operation })
}

// =============================================================================
// Unit Tests
// =============================================================================
