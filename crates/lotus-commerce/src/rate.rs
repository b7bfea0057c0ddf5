//! Fractional discount rates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A discount rate, normalized to `[0, 1]`.
///
/// Catalog and voucher rows occasionally arrive with rates outside the
/// valid range. The constructor clamps and logs instead of failing, so a
/// bad row degrades to a 0% or 100% discount rather than blocking
/// catalog browsing or checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Rate(Decimal);

impl Rate {
    /// A zero rate.
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// Create a rate, clamping out-of-range values into `[0, 1]`.
    pub fn new(value: Decimal) -> Self {
        if value < Decimal::ZERO || value > Decimal::ONE {
            tracing::warn!(%value, "discount rate outside [0, 1]; clamping");
        }
        Rate(value.clamp(Decimal::ZERO, Decimal::ONE))
    }

    /// Create a rate from a whole percentage (e.g., `10` for 10%).
    pub fn from_percent(percent: i64) -> Self {
        Rate::new(Decimal::new(percent, 2))
    }

    /// The rate as a decimal fraction.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// `1 - rate`, the fraction of the price that remains payable.
    pub fn complement(&self) -> Rate {
        Rate(Decimal::ONE - self.0)
    }

    /// Apply the rate to an exact minor-unit amount.
    pub fn of_minor(&self, minor: Decimal) -> Decimal {
        self.0 * minor
    }

    /// Check if this is a zero rate.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Decimal> for Rate {
    fn from(value: Decimal) -> Self {
        Rate::new(value)
    }
}

impl From<Rate> for Decimal {
    fn from(rate: Rate) -> Self {
        rate.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
