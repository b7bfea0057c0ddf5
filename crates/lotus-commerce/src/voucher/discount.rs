//! Voucher discount computation.

use crate::error::CommerceError;
use crate::money::Money;
use crate::voucher::{Voucher, VoucherDiscount};

/// Compute the amount a voucher takes off a subtotal.
///
/// Call only after [`evaluate`](crate::voucher::evaluate) reported the
/// voucher eligible. The result is clamped to the subtotal: one voucher
/// can never push an order negative.
///
/// # Errors
///
/// [`CommerceError::CurrencyMismatch`] when a fixed-amount voucher is
/// denominated in a different currency than the subtotal.
pub fn discount_amount(voucher: &Voucher, subtotal: Money) -> Result<Money, CommerceError> {
    let amount = match &voucher.discount {
        VoucherDiscount::Percentage(rate) => {
            Money::from_minor_decimal(rate.of_minor(subtotal.to_minor_decimal()), subtotal.currency)?
        }
        VoucherDiscount::FixedAmount(amount) => *amount,
    };
    amount.try_min(&subtotal)
}
