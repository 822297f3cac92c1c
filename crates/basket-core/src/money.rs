//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floating point:                                            │
//! │    14.99 * 0.10 = 1.4990000000000001                                    │
//! │    47.50 * 0.05 = 2.3750000000000004                                    │
//! │                                                                         │
//! │  Rounding those UP to the next 0.05 is fragile: a value that is        │
//! │  "really" a multiple of 0.05 can be nudged to the next nickel.         │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 decimals, kept at the precision they were       │
//! │  typed with. "10.004" stays 10.004 until it is printed.                │
//! │                                                                         │
//! │    price × bps          = 10.004 × 1000 = 10004      (exact)           │
//! │    nickels = ⌈10004 / 500⌉ = 21                                         │
//! │    tax     = 21 × 0.05  = 1.05                                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overflow
//! Every operation that can leave the decimal range, or would have to drop
//! digits to stay inside it, is `checked_*` and returns `None`.
//!
//! ## Usage
//! ```rust
//! use basket_core::money::Money;
//!
//! let price: Money = "14.99".parse().unwrap();
//! let doubled = price.checked_mul_quantity(2).unwrap();
//! assert_eq!(doubled.to_string(), "29.98");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::TaxRate;

/// One nickel: 0.05.
pub const NICKEL: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Basis points that make one nickel of tax per unit of price:
/// price × bps / 10_000 = nickels × 0.05  ⇔  nickels = price × bps / 500.
const BPS_PER_NICKEL: i64 = 500;

/// Decimal places shown on a receipt.
const DISPLAY_SCALE: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount held as an exact base-10 decimal.
///
/// ## Design Decisions
/// - **Exact input precision**: `"10.004"` is not rounded to a cent; tax is
///   computed on the price as written and only display rounds
/// - **Signed**: negative values are representable so the defensive price
///   checks have something to reject
/// - **No currency**: receipts print plain `12.49`, no symbol, no locale
///
/// ## Where Money is Used
/// ```text
/// "1 music CD at 14.99" ──► LineItem.unit_price (14.99)
///                                 │
///                                 ▼
///                    TaxEngine::total_tax (1.50)
///                                 │
///                                 ▼
///                 Receipt: "1 music CD: 16.49"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero, with no fractional digits.
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Creates a Money value from whole cents.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let price = Money::from_cents(1249);
    /// assert_eq!(price.to_string(), "12.49");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    #[inline]
    pub const fn zero() -> Self {
        Money::ZERO
    }

    /// Wraps a decimal amount as-is.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// The exact amount, before any display rounding.
    #[inline]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Adds two amounts without losing digits.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        let sum = self.0.checked_add(other.0)?;
        keeps_scale(sum, self.0.scale().max(other.0.scale()))
    }

    /// Multiplies by a quantity without losing digits.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1000);
    /// assert_eq!(unit_price.checked_mul_quantity(2), Some(Money::from_cents(2000)));
    /// ```
    pub fn checked_mul_quantity(self, qty: i64) -> Option<Money> {
        let product = self.0.checked_mul(Decimal::from(qty))?;
        keeps_scale(product, self.0.scale())
    }

    /// Rounds up to the nearest multiple of 0.05.
    ///
    /// Zero stays zero and exact multiples are returned unchanged.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let up = |c| Money::from_cents(c).round_up_to_nickel().unwrap();
    /// assert_eq!(up(101), Money::from_cents(105));
    /// assert_eq!(up(150), Money::from_cents(150));
    /// assert_eq!(up(0), Money::ZERO);
    /// ```
    pub fn round_up_to_nickel(&self) -> Option<Money> {
        let remainder = self.0.checked_rem(NICKEL)?;
        let floor = self.0.checked_sub(remainder)?;
        if remainder > Decimal::ZERO {
            floor.checked_add(NICKEL).map(Money)
        } else {
            Some(Money(floor))
        }
    }

    /// Applies `rate` and rounds the result up to the nearest 0.05.
    ///
    /// The rounding happens on the exact product `price × bps`, so 14.99 at
    /// 10% (1.499) becomes 1.50 and 10.004 at 10% (1.0004) becomes 1.05.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    /// use basket_core::types::TaxRate;
    ///
    /// let price = Money::from_cents(4750);
    /// let duty = price.apply_rate_rounded_up(TaxRate::from_bps(500)).unwrap();
    /// // 47.50 × 5% = 2.375 → 2.40
    /// assert_eq!(duty, Money::from_cents(240));
    /// ```
    pub fn apply_rate_rounded_up(&self, rate: TaxRate) -> Option<Money> {
        let scaled = self.0.checked_mul(Decimal::from(rate.bps()))?;
        let scaled = keeps_scale(scaled, self.0.scale())?.0;

        let per_nickel = Decimal::from(BPS_PER_NICKEL);
        let remainder = scaled.checked_rem(per_nickel)?;
        let mut nickels = scaled
            .checked_sub(remainder)?
            .checked_div(per_nickel)?
            .round();
        if remainder > Decimal::ZERO {
            nickels = nickels.checked_add(Decimal::ONE)?;
        }

        nickels.checked_mul(NICKEL).map(Money)
    }
}

/// Accepts `value` only if no fractional digits were dropped to fit it.
fn keeps_scale(value: Decimal, scale: u32) -> Option<Money> {
    (value.scale() >= scale).then_some(Money(value))
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Receipt display: rounded half-up to two decimals, no currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut shown = self
            .0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        shown.rescale(DISPLAY_SCALE);
        write!(f, "{shown}")
    }
}

/// Parses decimal text such as `"12.49"`, `"10"` or `"10.004"` exactly.
///
/// Text that needs more than 28 significant digits is rejected instead of
/// being rounded.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let digits = text.strip_prefix('-').unwrap_or(text);
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        let well_formed = !whole.is_empty()
            && whole.bytes().all(|b| b.is_ascii_digit())
            && fraction.bytes().all(|b| b.is_ascii_digit())
            && !(digits.contains('.') && fraction.is_empty());
        if !well_formed {
            return Err(ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: format!("'{text}' is not a decimal number"),
            });
        }

        Decimal::from_str_exact(text)
            .map(Money)
            .map_err(|_| ValidationError::TooLarge {
                field: "amount".to_string(),
            })
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn money(text: &str) -> Money {
        text.parse().unwrap()
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(Money::from_cents(1249), money("12.49"));
        assert_eq!(Money::from_cents(-550), money("-5.50"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1649).to_string(), "16.49");
        assert_eq!(Money::from_cents(85).to_string(), "0.85");
        assert_eq!(money("5").to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[rstest]
    #[case("10.004", "10.00")]
    #[case("11.054", "11.05")]
    #[case("0.125", "0.13")]
    #[case("0.124", "0.12")]
    #[case("1.995", "2.00")]
    fn test_display_rounds_half_up(#[case] text: &str, #[case] shown: &str) {
        assert_eq!(money(text).to_string(), shown);
    }

    #[rstest]
    #[case("12.49", 1249, 2)]
    #[case("10", 1000, 0)]
    #[case("10.0", 1000, 1)]
    #[case("0.5", 5, 1)]
    #[case("10.004", 10004, 3)]
    #[case("-5.50", -550, 2)]
    fn test_parse_is_exact(#[case] text: &str, #[case] mantissa: i64, #[case] scale: u32) {
        assert_eq!(money(text).as_decimal(), Decimal::new(mantissa, scale));
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("1.")]
    #[case(".5")]
    #[case("1.2.3")]
    #[case("1,50")]
    fn test_parse_rejects_malformed(#[case] text: &str) {
        assert!(matches!(
            text.parse::<Money>(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[rstest]
    #[case("79228162514264337593543950336")]
    #[case("0.00000000000000000000000000001")]
    fn test_parse_rejects_unrepresentable(#[case] text: &str) {
        assert!(matches!(
            text.parse::<Money>(),
            Err(ValidationError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_checked_add() {
        let sum = money("14.99").checked_add(money("1.50")).unwrap();
        assert_eq!(sum.to_string(), "16.49");
        assert_eq!(
            Money::from_decimal(Decimal::MAX).checked_add(money("1")),
            None
        );
    }

    #[test]
    fn test_checked_add_refuses_to_drop_digits() {
        let big = Money::from_decimal(Decimal::MAX);
        assert_eq!(big.checked_add(money("-0.001")), None);
    }

    #[test]
    fn test_checked_mul_quantity() {
        assert_eq!(
            money("9999999999.99").checked_mul_quantity(9_999_999_999),
            Some(money("99999999989900000000.01"))
        );
        assert_eq!(
            Money::from_decimal(Decimal::MAX).checked_mul_quantity(2),
            None
        );
    }

    #[rstest]
    #[case("0", "0")]
    #[case("0.01", "0.05")]
    #[case("0.05", "0.05")]
    #[case("1.49", "1.50")]
    #[case("7.11", "7.15")]
    #[case("1.0004", "1.05")]
    #[case("1.5000000001", "1.55")]
    fn test_round_up_to_nickel(#[case] amount: &str, #[case] expected: &str) {
        assert_eq!(money(amount).round_up_to_nickel(), Some(money(expected)));
    }

    #[rstest]
    // 14.99 × 10% = 1.499 → 1.50
    #[case("14.99", 1000, "1.50")]
    // 47.50 × 10% = 4.75 (exact)
    #[case("47.50", 1000, "4.75")]
    // 47.50 × 5% = 2.375 → 2.40
    #[case("47.50", 500, "2.40")]
    // 10.00 × 5% = 0.50 (exact)
    #[case("10.00", 500, "0.50")]
    // 27.99 × 5% = 1.3995 → 1.40
    #[case("27.99", 500, "1.40")]
    // 11.25 × 5% = 0.5625 → 0.60
    #[case("11.25", 500, "0.60")]
    // 10.004 × 10% = 1.0004 → 1.05
    #[case("10.004", 1000, "1.05")]
    // 10.0005 × 5% = 0.500025 → 0.55
    #[case("10.0005", 500, "0.55")]
    #[case("0", 1000, "0")]
    fn test_apply_rate_rounded_up(#[case] price: &str, #[case] bps: u32, #[case] expected: &str) {
        let tax = money(price).apply_rate_rounded_up(TaxRate::from_bps(bps));
        assert_eq!(tax, Some(money(expected)));
    }

    #[test]
    fn test_apply_rate_overflow() {
        let huge = Money::from_decimal(Decimal::MAX);
        assert_eq!(huge.apply_rate_rounded_up(TaxRate::from_bps(1000)), None);
    }

    #[test]
    fn test_serializes_exact_amount() {
        let json = serde_json::to_value(money("10.004")).unwrap();
        assert_eq!(json, "10.004");
    }
}
