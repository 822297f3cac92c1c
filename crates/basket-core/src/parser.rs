//! # Basket Line Parser
//!
//! Turns text like `"1 imported bottle of perfume at 27.99"` into
//! [`LineItem`]s.
//!
//! ## Line Grammar
//! ```text
//! ^\s*([0-9]+)\s+(.+?)\s+at\s+([0-9]+(\.[0-9]+)?)\s*$
//!      ───┬───    ─┬─          ──────────┬──────────
//!      quantity   name (lazy)          price
//! ```
//!
//! ## Check Order
//! ```text
//! line ──► empty?            ── yes ──► ParseError::EmptyInput
//!   │
//!   ├───► matches grammar?   ── no ───► ParseError::Format
//!   │
//!   ├───► quantity > 0?      ── no ───► ParseError::InvalidQuantity
//!   │
//!   ├───► price fits, >= 0?  ── no ───► ParseError::InvalidPrice
//!   │
//!   └───► name non-empty?    ── no ───► ParseError::EmptyName
//! ```
//!
//! Batches are all-or-nothing: the first bad line aborts the batch and the
//! error is wrapped with that line's 0-based index.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{ParseError, ParseResult, ValidationError};
use crate::money::Money;
use crate::types::LineItem;
use crate::validation::{validate_quantity, NAME_FIELD, PRICE_FIELD, QUANTITY_FIELD};

/// Short description of the accepted line shape.
pub const FORMAT_HINT: &str = "Expected format: \"quantity item_name at price\"";

/// Lines starting with this marker are skipped by [`parse_text`].
pub const COMMENT_MARKER: char = '#';

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]+)\s+(.+?)\s+at\s+([0-9]+(?:\.[0-9]+)?)\s*$")
        .expect("line pattern is a valid regex")
});

/// Format help with a worked example, suitable for showing to a user.
pub fn format_hint() -> String {
    format!("{FORMAT_HINT}\nExample: \"1 book at 12.49\"")
}

/// Parses a single basket line.
///
/// ## Example
/// ```rust
/// use basket_core::parser::parse_line;
///
/// let item = parse_line("1 music CD at 14.99").unwrap();
/// assert_eq!(item.name(), "music CD");
/// assert_eq!(item.quantity(), 1);
/// assert_eq!(item.unit_price().to_string(), "14.99");
///
/// assert!(parse_line("invalid input").is_err());
/// ```
pub fn parse_line(input: &str) -> ParseResult<LineItem> {
    let line = input.trim();
    if line.is_empty() {
        return Err(ParseError::EmptyInput {
            input: input.to_string(),
        });
    }

    let caps = LINE_PATTERN.captures(line).ok_or_else(|| ParseError::Format {
        input: input.to_string(),
    })?;

    let quantity = caps[1]
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidQuantity {
            input: input.to_string(),
            source: ValidationError::OutOfRange {
                field: QUANTITY_FIELD.to_string(),
                min: 1,
                max: i64::MAX,
            },
        })?;
    validate_quantity(quantity).map_err(|source| ParseError::InvalidQuantity {
        input: input.to_string(),
        source,
    })?;

    let price = Money::from_str(&caps[3]).map_err(|source| ParseError::InvalidPrice {
        input: input.to_string(),
        source,
    })?;

    LineItem::new(&caps[2], price, quantity).map_err(|e| field_error(e, input))
}

/// Maps a [`LineItem::new`] rejection onto the parse error for that field.
fn field_error(err: ValidationError, input: &str) -> ParseError {
    let input = input.to_string();
    let field = err.field().to_string();
    match field.as_str() {
        QUANTITY_FIELD => ParseError::InvalidQuantity { input, source: err },
        PRICE_FIELD => ParseError::InvalidPrice { input, source: err },
        NAME_FIELD => ParseError::EmptyName { input },
        _ => ParseError::Format { input },
    }
}

/// Parses every line, stopping at the first failure.
///
/// The error names the 0-based index of the failing line.
pub fn parse_batch<I, S>(lines: I) -> ParseResult<Vec<LineItem>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items = lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            parse_line(line.as_ref()).map_err(|e| ParseError::AtIndex {
                index,
                source: Box::new(e),
            })
        })
        .collect::<ParseResult<Vec<_>>>()?;

    debug!(count = items.len(), "parsed basket lines");
    Ok(items)
}

/// Parses a multi-line block, skipping blank lines and `#` comments.
///
/// Indexes in errors count only the lines that were kept.
///
/// ## Example
/// ```rust
/// use basket_core::parser::parse_text;
///
/// let items = parse_text("# basket 1\n1 book at 12.49\n\n1 music CD at 14.99\n").unwrap();
/// assert_eq!(items.len(), 2);
/// ```
pub fn parse_text(block: &str) -> ParseResult<Vec<LineItem>> {
    let mut skipped = 0usize;
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| {
            let keep = !line.is_empty() && !line.starts_with(COMMENT_MARKER);
            if !keep {
                skipped += 1;
            }
            keep
        })
        .collect();

    debug!(kept = lines.len(), skipped, "filtered basket text");
    parse_batch(lines)
}

/// Returns whether [`parse_line`] would accept `input`.
pub fn is_valid(input: &str) -> bool {
    parse_line(input).is_ok()
}

impl FromStr for LineItem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
