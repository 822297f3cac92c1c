//! # Tax Configuration
//!
//! The two rates the [`TaxEngine`](crate::TaxEngine) applies.
//!
//! Rates are constants for the life of the process. They are carried in a
//! value that is handed to the engine rather than read from globals, so
//! tests can build an engine with different numbers.
//!
//! ## Format
//! ```json
//! { "basic_rate": 1000, "import_duty_rate": 500 }
//! ```
//! Both fields are basis points and both may be omitted.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::TaxRate;
use crate::validation::validate_tax_rate_bps;
use crate::{BASIC_SALES_TAX_RATE, IMPORT_DUTY_RATE};

/// Rates used by the tax engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConfig {
    /// Applied to every item that is not exempt.
    #[serde(default = "default_basic_rate")]
    pub basic_rate: TaxRate,

    /// Applied to every imported item, exempt or not.
    #[serde(default = "default_import_duty_rate")]
    pub import_duty_rate: TaxRate,
}

fn default_basic_rate() -> TaxRate {
    BASIC_SALES_TAX_RATE
}

fn default_import_duty_rate() -> TaxRate {
    IMPORT_DUTY_RATE
}

impl Default for TaxConfig {
    fn default() -> Self {
        TaxConfig {
            basic_rate: default_basic_rate(),
            import_duty_rate: default_import_duty_rate(),
        }
    }
}

impl TaxConfig {
    /// Rejects rates above 100%.
    pub fn validate(&self) -> CoreResult<()> {
        let rates = [
            ("basic_rate", self.basic_rate),
            ("import_duty_rate", self.import_duty_rate),
        ];

        for (name, rate) in rates {
            validate_tax_rate_bps(rate.bps()).map_err(|e| CoreError::InvalidConfig {
                reason: format!("{name} is {rate}: {e}"),
            })?;
        }

        Ok(())
    }
}
