//! Cart aggregation and pricing.

use crate::cart::CartLine;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a single cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedLine {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Units purchased.
    pub quantity: i64,
    /// Effective unit price, rounded for display.
    pub unit_price: Money,
    /// Line total (`unit_price * quantity`), rounded for display.
    pub line_total: Money,
    /// Amount saved versus the undiscounted price.
    pub savings: Money,
}

/// A cart collapsed into priced line items.
///
/// `subtotal` is the authoritative figure: line math is accumulated in
/// exact decimal minor units and rounded half-up exactly once, so the
/// subtotal can differ from the sum of the display-rounded line totals
/// by a fraction of a minor unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedCart {
    /// Priced line items.
    pub lines: Vec<PricedLine>,
    /// Sum of line totals, rounded once.
    pub subtotal: Money,
    /// Total saved through product discount windows.
    pub savings: Money,
}

impl PricedCart {
    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Check if any product discount applied.
    pub fn has_savings(&self) -> bool {
        self.savings.is_positive()
    }
}

/// Collapse cart lines into priced line items and a subtotal.
///
/// Each line is priced through the product's discount window at `now`.
/// Pure: the input snapshot is never mutated. An empty cart aggregates
/// to a zero subtotal in the storefront's default currency.
///
/// # Errors
///
/// - [`CommerceError::InvalidQuantity`] for a non-positive quantity.
/// - [`CommerceError::InsufficientStock`] when a snapshot cannot cover
///   the requested quantity.
/// - [`CommerceError::CurrencyMismatch`] when lines disagree on currency.
/// - [`CommerceError::Overflow`] when a total exceeds the representable
///   range.
pub fn aggregate(lines: &[CartLine], now: DateTime<Utc>) -> Result<PricedCart, CommerceError> {
    let currency = lines
        .first()
        .map(|l| l.product.price.currency)
        .unwrap_or(Currency::VND);

    let mut priced = Vec::with_capacity(lines.len());
    let mut subtotal_minor = Decimal::ZERO;
    let mut savings_minor = Decimal::ZERO;

    for line in lines {
        if line.quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(line.quantity));
        }
        if !line.product.can_fulfill(line.quantity) {
            return Err(CommerceError::InsufficientStock {
                product_id: line.product.id.as_str().to_string(),
                requested: line.quantity,
                available: line.product.stock_quantity,
            });
        }
        let line_currency = line.product.price.currency;
        if line_currency != currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: line_currency.code().to_string(),
            });
        }

        let quantity = Decimal::from(line.quantity);
        let unit_minor = line.product.effective_unit_minor(now);
        let line_minor = unit_minor
            .checked_mul(quantity)
            .ok_or(CommerceError::Overflow)?;
        let base_minor = line
            .product
            .price
            .to_minor_decimal()
            .checked_mul(quantity)
            .ok_or(CommerceError::Overflow)?;

        subtotal_minor = subtotal_minor
            .checked_add(line_minor)
            .ok_or(CommerceError::Overflow)?;
        savings_minor = savings_minor
            .checked_add(base_minor - line_minor)
            .ok_or(CommerceError::Overflow)?;

        priced.push(PricedLine {
            product_id: line.product.id.clone(),
            name: line.product.name.clone(),
            quantity: line.quantity,
            unit_price: Money::from_minor_decimal(unit_minor, line_currency)?,
            line_total: Money::from_minor_decimal(line_minor, line_currency)?,
            savings: Money::from_minor_decimal(base_minor - line_minor, line_currency)?,
        });
    }

    Ok(PricedCart {
        lines: priced,
        subtotal: Money::from_minor_decimal(subtotal_minor, currency)?,
        savings: Money::from_minor_decimal(savings_minor, currency)?,
    })
}
