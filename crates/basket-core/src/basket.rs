//! # Basket Processing
//!
//! One-call entry points: raw basket text in, receipt text out.
//!
//! ```text
//! lines ──► parser::parse_batch ──► Receipt::from_items ──► Receipt::format
//!                 │                                             │
//!                 └── ParseError ──────┬──── AmountOverflow ◄───┘
//!                                      ▼
//!                 CoreError::Basket ("failed to process basket: ...")
//! ```

use tracing::warn;

use crate::error::{CoreError, CoreResult, ParseResult};
use crate::parser;
use crate::receipt::Receipt;
use crate::tax::TaxEngine;
use crate::types::LineItem;

/// The three reference baskets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleBasket {
    One,
    Two,
    Three,
}

impl SampleBasket {
    pub const ALL: [SampleBasket; 3] = [SampleBasket::One, SampleBasket::Two, SampleBasket::Three];

    /// Looks a basket up by its number (1, 2 or 3).
    pub fn from_number(number: u8) -> CoreResult<Self> {
        match number {
            1 => Ok(SampleBasket::One),
            2 => Ok(SampleBasket::Two),
            3 => Ok(SampleBasket::Three),
            other => Err(CoreError::UnknownSampleBasket(other)),
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            SampleBasket::One => 1,
            SampleBasket::Two => 2,
            SampleBasket::Three => 3,
        }
    }

    /// Input lines for this basket.
    pub fn lines(&self) -> &'static [&'static str] {
        match self {
            SampleBasket::One => &[
                "1 book at 12.49",
                "1 music CD at 14.99",
                "1 chocolate bar at 0.85",
            ],
            SampleBasket::Two => &[
                "1 imported box of chocolates at 10.00",
                "1 imported bottle of perfume at 47.50",
            ],
            SampleBasket::Three => &[
                "1 imported bottle of perfume at 27.99",
                "1 bottle of perfume at 18.99",
                "1 packet of headache pills at 9.75",
                "1 imported box of chocolates at 11.25",
            ],
        }
    }
}

/// Parses `lines` and renders the receipt with the standard rates.
///
/// ## Example
/// ```rust
/// use basket_core::basket::process_basket;
///
/// let receipt = process_basket(["1 imported box of chocolates at 10.00"]).unwrap();
/// assert_eq!(
///     receipt,
///     "1 imported box of chocolates: 10.50\nSales Taxes: 0.50\nTotal: 10.50"
/// );
///
/// let err = process_basket(["invalid input"]).unwrap_err();
/// assert!(err.to_string().starts_with("failed to process basket:"));
/// ```
pub fn process_basket<I, S>(lines: I) -> CoreResult<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    render(&TaxEngine::new(), parser::parse_batch(lines))
}

/// Parses a text block (blank lines and `#` comments skipped) and renders it.
pub fn process_text(block: &str) -> CoreResult<String> {
    render(&TaxEngine::new(), parser::parse_text(block))
}

/// Renders one of the reference baskets.
pub fn process_sample(basket: SampleBasket) -> CoreResult<String> {
    process_basket(basket.lines())
}

/// Renders `lines` with a caller-supplied engine.
pub fn process_basket_with<I, S>(engine: &TaxEngine, lines: I) -> CoreResult<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    render(engine, parser::parse_batch(lines))
}

fn render(engine: &TaxEngine, parsed: ParseResult<Vec<LineItem>>) -> CoreResult<String> {
    parsed
        .map_err(CoreError::from)
        .and_then(|items| Receipt::from_items(*engine, items).format())
        .map_err(|err| {
            warn!(error = %err, "rejected basket input");
            err.into_basket()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use std::error::Error as _;

    #[test]
    fn test_sample_numbers_round_trip() {
        for basket in SampleBasket::ALL {
            assert_eq!(SampleBasket::from_number(basket.number()).unwrap(), basket);
        }
    }

    #[test]
    fn test_unknown_sample() {
        let err = SampleBasket::from_number(4).unwrap_err();
        assert!(matches!(err, CoreError::UnknownSampleBasket(4)));
        assert_eq!(
            err.to_string(),
            "unknown sample basket 4: valid sets are 1, 2, or 3"
        );
    }

    #[test]
    fn test_process_sample_two() {
        assert_eq!(
            process_sample(SampleBasket::Two).unwrap(),
            "1 imported box of chocolates: 10.50\n\
             1 imported bottle of perfume: 54.65\n\
             Sales Taxes: 7.65\n\
             Total: 65.15"
        );
    }

    #[test]
    fn test_error_keeps_cause() {
        let err = process_basket(["1 book at 12.49", "0 book at 1.00"]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("failed to process basket: error parsing item at index 1:"));
        assert!(msg.contains("quantity must be a positive integer"));

        assert!(err.source().is_some());
        match err.root() {
            CoreError::Parse(parse) => {
                assert!(matches!(parse.root(), ParseError::InvalidQuantity { .. }))
            }
            other => panic!("unexpected cause: {other:?}"),
        }
    }

    #[test]
    fn test_process_text_error() {
        let err = process_text("# only junk\nnot a line\n").unwrap_err();
        assert!(matches!(
            err.root(),
            CoreError::Parse(ParseError::AtIndex { index: 0, .. })
        ));
    }

    #[test]
    fn test_overflow_is_wrapped() {
        let err = process_basket(["1 music CD at 79228162514264337593543950335"]).unwrap_err();
        assert!(matches!(err, CoreError::Basket { .. }));
        assert!(matches!(err.root(), CoreError::AmountOverflow { .. }));
        assert!(err
            .to_string()
            .starts_with("failed to process basket: amount overflow while computing"));
    }

    #[test]
    fn test_process_basket_with_engine() {
        let engine = TaxEngine::with_config(crate::TaxConfig {
            basic_rate: crate::TaxRate::from_bps(2000),
            ..crate::TaxConfig::default()
        })
        .unwrap();
        let receipt = process_basket_with(&engine, ["1 music CD at 10.00"]).unwrap();
        assert_eq!(receipt, "1 music CD: 12.00\nSales Taxes: 2.00\nTotal: 12.00");
    }
}
