//! Cart line types.

use crate::catalog::ProductSnapshot;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// One product entry in a customer's cart.
///
/// Carries the product snapshot taken when the cart was read, so one
/// checkout computation prices every line against the same catalog state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Snapshot of the product at cart-read time.
    pub product: ProductSnapshot,
    /// Units requested. Always positive.
    pub quantity: i64,
}

impl CartLine {
    /// Create a new cart line.
    ///
    /// Returns an error if the quantity is zero or negative.
    pub fn new(product: ProductSnapshot, quantity: i64) -> Result<Self, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        Ok(Self { product, quantity })
    }
}
