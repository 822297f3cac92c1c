//! # basket-core: Sales Tax for Shopping Baskets
//!
//! Parses free-text basket lines, computes basic sales tax and import duty,
//! and renders receipts. Everything here is a pure function: no I/O, no
//! global mutable state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   "1 music CD at 14.99"                                                 │
//! │            │                                                            │
//! │            ▼                                                            │
//! │   ┌─────────────────┐     ┌─────────────────┐     ┌─────────────────┐  │
//! │   │     parser      │────►│     receipt     │────►│  receipt text   │  │
//! │   │  LineItem       │     │  Receipt        │     │  "Total: 16.49" │  │
//! │   └─────────────────┘     └────────┬────────┘     └─────────────────┘  │
//! │                                    │ uses                               │
//! │                           ┌────────▼────────┐                           │
//! │                           │       tax       │                           │
//! │                           │   TaxEngine     │◄── config::TaxConfig      │
//! │                           └─────────────────┘                           │
//! │                                                                         │
//! │   basket: parse + receipt + format in one call                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `LineItem`, `TaxRate`
//! - [`money`] - Exact decimal Money with checked arithmetic and nickel rounding
//! - [`parser`] - Line grammar and batch/text parsing
//! - [`tax`] - `TaxEngine`
//! - [`receipt`] - `Receipt` totals, formatting, statistics
//! - [`basket`] - One-call processing of raw input
//! - [`config`] - Tax rates handed to the engine
//! - [`error`] - Domain error types
//! - [`validation`] - Field rules for line items and rates
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::basket::process_basket;
//!
//! let receipt = process_basket([
//!     "1 book at 12.49",
//!     "1 music CD at 14.99",
//!     "1 chocolate bar at 0.85",
//! ])
//! .unwrap();
//!
//! assert_eq!(
//!     receipt,
//!     "1 book: 12.49\n1 music CD: 16.49\n1 chocolate bar: 0.85\nSales Taxes: 1.50\nTotal: 29.83"
//! );
//! ```
//!
//! ## Logging
//! The crate emits `tracing` events (`debug` for parsing and formatting,
//! `warn` for rejected baskets). Installing a subscriber is the caller's job.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod config;
pub mod error;
pub mod money;
pub mod parser;
pub mod receipt;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::{process_basket, process_sample, process_text, SampleBasket};
pub use config::TaxConfig;
pub use error::{CoreError, CoreResult, ParseError, ParseResult, ValidationError};
pub use money::Money;
pub use parser::{is_valid, parse_batch, parse_line, parse_text};
pub use receipt::{Receipt, ReceiptStatistics};
pub use tax::TaxEngine;
pub use types::{LineItem, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Basic sales tax: 10%, charged on everything that is not exempt.
pub const BASIC_SALES_TAX_RATE: TaxRate = TaxRate::from_bps(1000);

/// Import duty: 5%, charged on every imported item with no exemptions.
pub const IMPORT_DUTY_RATE: TaxRate = TaxRate::from_bps(500);
