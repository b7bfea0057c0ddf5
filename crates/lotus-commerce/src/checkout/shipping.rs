//! Shipping method types.

use crate::ids::ShippingMethodId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shipping method option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingMethod {
    /// Unique identifier.
    pub id: ShippingMethodId,
    /// Display name.
    pub name: String,
    /// Flat fee for this method.
    pub fee: Money,
    /// Orders at or above this subtotal ship free.
    pub free_over: Option<Money>,
}

impl ShippingMethod {
    /// Create a new shipping method.
    pub fn new(id: ShippingMethodId, name: impl Into<String>, fee: Money) -> Self {
        Self {
            id,
            name: name.into(),
            fee,
            free_over: None,
        }
    }

    /// Add a free-shipping threshold.
    pub fn with_free_over(mut self, threshold: Money) -> Self {
        self.free_over = Some(threshold);
        self
    }

    /// The fee charged for an order with the given subtotal.
    ///
    /// The threshold only waives the fee when it is denominated in the
    /// subtotal's currency; a mismatched threshold is ignored and the
    /// flat fee applies.
    pub fn fee_for(&self, subtotal: &Money) -> Money {
        match &self.free_over {
            Some(threshold)
                if threshold.currency == subtotal.currency
                    && subtotal.amount >= threshold.amount =>
            {
                Money::zero(self.fee.currency)
            }
            _ => self.fee,
        }
    }
}
