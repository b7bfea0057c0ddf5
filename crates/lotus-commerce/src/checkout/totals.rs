//! Checkout total computation.

use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The final price breakdown for an order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckoutTotal {
    /// Cart subtotal.
    pub subtotal: Money,
    /// Shipping fee.
    pub shipping_fee: Money,
    /// Voucher discount taken off.
    pub voucher_discount: Money,
    /// Payable amount: `subtotal + shipping_fee - voucher_discount`,
    /// clamped at zero.
    pub grand_total: Money,
}

/// Compose subtotal, shipping, and voucher discount into the payable
/// total.
///
/// This is the only place the arithmetic lives; storefront, admin, and
/// mobile surfaces all present this result rather than recomputing it.
/// The grand total is clamped at zero: shipping fee and discount are
/// computed independently, and a free-shipping promotion stacked on a
/// fixed-amount voucher could otherwise drive the sum negative on its
/// way to payment.
///
/// # Errors
///
/// [`CommerceError::CurrencyMismatch`] when the three inputs disagree on
/// currency, [`CommerceError::Overflow`] on unrepresentable sums.
pub fn totalize(
    subtotal: Money,
    shipping_fee: Money,
    voucher_discount: Money,
) -> Result<CheckoutTotal, CommerceError> {
    let payable = subtotal
        .try_add(&shipping_fee)?
        .try_subtract(&voucher_discount)?;
    let grand_total = Money::new(payable.amount.max(0), payable.currency);

    Ok(CheckoutTotal {
        subtotal,
        shipping_fee,
        voucher_discount,
        grand_total,
    })
}
