//! Checkout quote assembly.

use crate::cart::PricedCart;
use crate::checkout::{totalize, CheckoutTotal};
use crate::error::CommerceError;
use crate::ids::VoucherId;
use crate::money::Money;
use crate::voucher::Voucher;
use serde::{Deserialize, Serialize};

/// A voucher applied to a checkout, with its computed discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedVoucher {
    /// The voucher applied.
    pub voucher_id: VoucherId,
    /// The code the customer entered.
    pub code: String,
    /// Amount taken off the order.
    pub amount: Money,
}

impl AppliedVoucher {
    /// Create from a voucher and its computed discount amount.
    pub fn from_voucher(voucher: &Voucher, amount: Money) -> Self {
        Self {
            voucher_id: voucher.id.clone(),
            code: voucher.code.clone(),
            amount,
        }
    }
}

/// Everything the order placement service needs to persist an order.
///
/// At most one voucher applies per order. The service receiving this
/// quote owns the atomic `used_count`/`is_used` mutation and must
/// re-validate the voucher inside its transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutQuote {
    /// The priced cart.
    pub cart: PricedCart,
    /// Shipping fee charged.
    pub shipping_fee: Money,
    /// Voucher applied, if any.
    pub voucher: Option<AppliedVoucher>,
    /// The final price breakdown.
    pub total: CheckoutTotal,
}

impl CheckoutQuote {
    /// Assemble a quote, computing the total through [`totalize`].
    pub fn assemble(
        cart: PricedCart,
        shipping_fee: Money,
        voucher: Option<AppliedVoucher>,
    ) -> Result<Self, CommerceError> {
        let discount = voucher
            .as_ref()
            .map(|v| v.amount)
            .unwrap_or_else(|| Money::zero(cart.subtotal.currency));
        let total = totalize(cart.subtotal, shipping_fee, discount)?;

        Ok(Self {
            cart,
            shipping_fee,
            voucher,
            total,
        })
    }

    /// The applied voucher's id, if any.
    pub fn voucher_id(&self) -> Option<&VoucherId> {
        self.voucher.as_ref().map(|v| &v.voucher_id)
    }
}
