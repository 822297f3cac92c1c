//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ValidationError  - A single field (quantity, price, name, rate) is bad │
//! │  ParseError       - A basket line could not become a LineItem           │
//! │  CoreError        - What callers of the basket functions see            │
//! │                                                                         │
//! │  Flow: ValidationError → ParseError → ParseError::AtIndex → CoreError   │
//! │        amount overflow ─────────────────────────────────────► CoreError │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending input line in every parse error
//! 3. Errors are enum variants, never String
//! 4. Wrapping keeps the cause's text in the outer message

use thiserror::Error;

use crate::parser::FORMAT_HINT;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by the basket composition layer and engine setup.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Processing the basket failed. The cause is kept verbatim.
    ///
    /// ## User Workflow
    /// ```text
    /// process_basket(["1 book at 12.49", "invalid input"])
    ///      │
    ///      ▼
    /// ParseError::AtIndex { index: 1, Format { .. } }
    ///      │
    ///      ▼
    /// "failed to process basket: error parsing item at index 1: ..."
    /// ```
    #[error("failed to process basket: {source}")]
    Basket {
        #[source]
        source: Box<CoreError>,
    },

    /// A basket line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An amount left the representable decimal range.
    #[error("amount overflow while computing {operation}")]
    AmountOverflow { operation: &'static str },

    /// Only the three reference baskets exist.
    #[error("unknown sample basket {0}: valid sets are 1, 2, or 3")]
    UnknownSampleBasket(u8),

    /// Tax configuration was rejected.
    #[error("invalid tax configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Wraps `self` as a basket failure, unless it already is one.
    pub fn into_basket(self) -> CoreError {
        match self {
            CoreError::Basket { .. } => self,
            other => CoreError::Basket {
                source: Box::new(other),
            },
        }
    }

    /// Returns the cause behind any basket wrapper.
    pub fn root(&self) -> &CoreError {
        match self {
            CoreError::Basket { source } => source.root(),
            other => other,
        }
    }
}

// =============================================================================
// Parse Error
// =============================================================================

/// A basket line could not be turned into a [`LineItem`](crate::LineItem).
///
/// Every variant carries the raw text that was rejected.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Line was empty or only whitespace.
    #[error("input cannot be empty")]
    EmptyInput { input: String },

    /// Line does not match `<quantity> <name> at <price>`.
    #[error("invalid input format: \"{input}\". {}", FORMAT_HINT)]
    Format { input: String },

    /// Quantity was zero or too large to represent.
    #[error("invalid quantity in \"{input}\": {source}")]
    InvalidQuantity {
        input: String,
        #[source]
        source: ValidationError,
    },

    /// Price was negative or too large to represent.
    #[error("invalid price in \"{input}\": {source}")]
    InvalidPrice {
        input: String,
        #[source]
        source: ValidationError,
    },

    /// Item name was empty after trimming.
    #[error("item name cannot be empty in \"{input}\"")]
    EmptyName { input: String },

    /// A line inside a batch failed; `index` is 0-based.
    #[error("error parsing item at index {index}: {source}")]
    AtIndex {
        index: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Returns the raw line that caused the failure.
    pub fn input(&self) -> &str {
        match self {
            ParseError::EmptyInput { input }
            | ParseError::Format { input }
            | ParseError::InvalidQuantity { input, .. }
            | ParseError::InvalidPrice { input, .. }
            | ParseError::EmptyName { input } => input,
            ParseError::AtIndex { source, .. } => source.input(),
        }
    }

    /// Returns the innermost error, skipping batch position wrappers.
    pub fn root(&self) -> &ParseError {
        match self {
            ParseError::AtIndex { source, .. } => source.root(),
            other => other,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation failures.
///
/// Used by [`LineItem::new`](crate::LineItem::new) and the parser before a
/// line item is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be a positive integer")]
    MustBePositive { field: String },

    /// Value could not be read as a number of the expected shape.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value needs more than 28 significant digits.
    #[error("{field} is too large to represent exactly")]
    TooLarge { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ParseError.
pub type ParseResult<T> = Result<T, ParseError>;

// =============================================================================
// Unit Tests
// =============================================================================
