//! Money type for representing monetary values.
//!
//! Uses a minor-unit integer representation (whole dong for VND, cents
//! for USD) to avoid floating-point precision issues that plague monetary
//! calculations. Fractional intermediates (discounted unit prices, line
//! totals before the subtotal rounding point) are carried as
//! [`rust_decimal::Decimal`] minor units and converted back with a single
//! round-half-up.

use crate::error::CommerceError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Vietnamese dong, the storefront's primary currency.
    #[default]
    VND,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "VND").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::VND => "VND",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₫").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::VND => "\u{20ab}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::VND => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "VND" => Some(Currency::VND),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (whole dong
/// for VND, cents for USD). All arithmetic is checked: combining values
/// of different currencies or overflowing `i64` yields a
/// [`CommerceError`], never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Add another Money value.
    ///
    /// Fails on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Result<Money, CommerceError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Subtract another Money value.
    ///
    /// Fails on currency mismatch or overflow.
    pub fn try_subtract(&self, other: &Money) -> Result<Money, CommerceError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Multiply by an integer factor (e.g., a quantity).
    pub fn try_multiply(&self, factor: i64) -> Result<Money, CommerceError> {
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// The smaller of two same-currency values.
    pub fn try_min(&self, other: &Money) -> Result<Money, CommerceError> {
        self.ensure_same_currency(other)?;
        Ok(Money::new(self.amount.min(other.amount), self.currency))
    }

    /// The amount as an exact decimal in minor units.
    pub fn to_minor_decimal(&self) -> Decimal {
        Decimal::from(self.amount)
    }

    /// Convert an exact minor-unit decimal back into Money, rounding
    /// half-up to the nearest minor unit.
    ///
    /// This is the single rounding point for cart subtotals: fractional
    /// line math stays in `Decimal` and lands here exactly once.
    pub fn from_minor_decimal(value: Decimal, currency: Currency) -> Result<Money, CommerceError> {
        let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let amount = rounded.to_i64().ok_or(CommerceError::Overflow)?;
        Ok(Money::new(amount, currency))
    }

    /// Format as a display string (e.g., "₫200000").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places();
        if places == 0 {
            return format!("{}{}", self.currency.symbol(), self.amount);
        }
        let divisor = 10_i64.pow(places);
        let whole = self.amount / divisor;
        let frac = (self.amount % divisor).abs();
        format!(
            "{}{}.{:0places$}",
            self.currency.symbol(),
            whole,
            frac,
            places = places as usize
        )
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), CommerceError> {
        if self.currency != other.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor_units() {
        let m = Money::new(200_000, Currency::VND);
        assert_eq!(m.amount, 200_000);
        assert_eq!(m.currency, Currency::VND);
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(100_000, Currency::VND);
        let b = Money::new(50_000, Currency::VND);
        assert_eq!(a.try_add(&b).unwrap().amount, 150_000);
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::new(100_000, Currency::VND);
        let b = Money::new(30_000, Currency::VND);
        assert_eq!(a.try_subtract(&b).unwrap().amount, 70_000);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(25_000, Currency::VND);
        assert_eq!(m.try_multiply(3).unwrap().amount, 75_000);
    }

    #[test]
    fn test_currency_mismatch() {
        let vnd = Money::new(1000, Currency::VND);
        let usd = Money::new(1000, Currency::USD);
        assert_eq!(
            vnd.try_add(&usd),
            Err(CommerceError::CurrencyMismatch {
                expected: "VND".to_string(),
                got: "USD".to_string(),
            })
        );
    }

    #[test]
    fn test_overflow() {
        let m = Money::new(i64::MAX, Currency::VND);
        assert_eq!(m.try_add(&m), Err(CommerceError::Overflow));
        assert_eq!(m.try_multiply(2), Err(CommerceError::Overflow));
    }

    #[test]
    fn test_round_half_up() {
        let half = Decimal::new(105, 1); // 10.5
        assert_eq!(
            Money::from_minor_decimal(half, Currency::VND).unwrap().amount,
            11
        );

        let below = Decimal::new(104, 1); // 10.4
        assert_eq!(
            Money::from_minor_decimal(below, Currency::VND).unwrap().amount,
            10
        );
    }

    #[test]
    fn test_vnd_has_no_decimal_places() {
        assert_eq!(Currency::VND.decimal_places(), 0);
        let m = Money::new(200_000, Currency::VND);
        assert_eq!(m.display(), "\u{20ab}200000");
    }

    #[test]
    fn test_usd_display() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("VND"), Some(Currency::VND));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
