//! # Receipt
//!
//! Collects line items and renders them with their taxes.
//!
//! ## Output Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1 imported bottle of perfume: 32.19    ◄── qty name: unit price + tax │
//! │  1 bottle of perfume: 20.89                                            │
//! │  1 packet of headache pills: 9.75                                      │
//! │  1 imported box of chocolates: 11.85                                   │
//! │  Sales Taxes: 6.70                      ◄── Σ tax × qty                │
//! │  Total: 74.68                           ◄── Σ (price + tax) × qty      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Lines are joined with `\n` and there is no trailing newline.

use serde::Serialize;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::tax::TaxEngine;
use crate::types::LineItem;

/// An ordered list of line items bound to the engine that taxes them.
#[derive(Debug, Clone, Default)]
pub struct Receipt {
    engine: TaxEngine,
    items: Vec<LineItem>,
}

/// Summary numbers for a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReceiptStatistics {
    /// Number of lines.
    pub item_count: usize,
    /// Sum of all quantities, widened so large baskets cannot wrap.
    pub total_quantity: i128,
    /// Lines exempt from basic sales tax.
    pub exempt_item_count: usize,
    /// Lines subject to import duty.
    pub imported_item_count: usize,
    pub total_tax: Money,
    pub total_cost: Money,
}

impl Receipt {
    /// Creates an empty receipt.
    pub fn new(engine: TaxEngine) -> Self {
        Receipt {
            engine,
            items: Vec::new(),
        }
    }

    /// Creates a receipt holding `items` in order.
    pub fn from_items(engine: TaxEngine, items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut receipt = Receipt::new(engine);
        receipt.extend(items);
        receipt
    }

    pub fn add(&mut self, item: LineItem) {
        self.items.push(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = LineItem>) {
        self.items.extend(items);
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn engine(&self) -> &TaxEngine {
        &self.engine
    }

    /// Σ per-unit tax × quantity.
    pub fn total_tax(&self) -> CoreResult<Money> {
        self.items.iter().try_fold(Money::zero(), |total, item| {
            let line_tax = self.line_tax(item)?;
            sum(total, line_tax, "sales taxes")
        })
    }

    /// Σ (unit price + per-unit tax) × quantity.
    pub fn total_cost(&self) -> CoreResult<Money> {
        self.items.iter().try_fold(Money::zero(), |total, item| {
            let line_cost = sum(item.line_total()?, self.line_tax(item)?, "line cost")?;
            sum(total, line_cost, "total cost")
        })
    }

    /// Price of one unit including tax. Quantity is not applied.
    pub fn final_unit_price(&self, item: &LineItem) -> CoreResult<Money> {
        self.engine
            .final_price(item.unit_price(), item.is_tax_exempt(), item.is_imported())
    }

    fn line_tax(&self, item: &LineItem) -> CoreResult<Money> {
        self.engine
            .tax_for_item(item)?
            .checked_mul_quantity(item.quantity())
            .ok_or(CoreError::AmountOverflow {
                operation: "line tax",
            })
    }

    /// Renders the receipt text.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{parser, Receipt, TaxEngine};
    ///
    /// let items = parser::parse_batch(["1 music CD at 14.99"]).unwrap();
    /// let receipt = Receipt::from_items(TaxEngine::new(), items);
    /// assert_eq!(
    ///     receipt.format().unwrap(),
    ///     "1 music CD: 16.49\nSales Taxes: 1.50\nTotal: 16.49"
    /// );
    /// ```
    pub fn format(&self) -> CoreResult<String> {
        let total_tax = self.total_tax()?;
        let total_cost = self.total_cost()?;

        let mut lines = self
            .items
            .iter()
            .map(|item| {
                let price = self.final_unit_price(item)?;
                Ok(format!("{} {}: {}", item.quantity(), item.name(), price))
            })
            .collect::<CoreResult<Vec<String>>>()?;
        lines.push(format!("Sales Taxes: {total_tax}"));
        lines.push(format!("Total: {total_cost}"));

        debug!(
            items = self.items.len(),
            total_tax = %total_tax,
            total_cost = %total_cost,
            "formatted receipt"
        );
        Ok(lines.join("\n"))
    }

    pub fn statistics(&self) -> CoreResult<ReceiptStatistics> {
        Ok(ReceiptStatistics {
            item_count: self.items.len(),
            total_quantity: self.items.iter().map(|i| i128::from(i.quantity())).sum(),
            exempt_item_count: self.items.iter().filter(|i| i.is_tax_exempt()).count(),
            imported_item_count: self.items.iter().filter(|i| i.is_imported()).count(),
            total_tax: self.total_tax()?,
            total_cost: self.total_cost()?,
        })
    }
}

fn sum(left: Money, right: Money, operation: &'static str) -> CoreResult<Money> {
    left.checked_add(right)
        .ok_or(CoreError::AmountOverflow { operation })
}

// =============================================================================
// Unit Tests
// =============================================================================
