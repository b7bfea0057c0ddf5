//! Voucher eligibility conditions.

use crate::ids::{CategoryId, ProductId, WardId};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One eligibility condition on a voucher.
///
/// Conditions of the same variant are OR'd together (any matching ward
/// is enough); different variants are AND'd (the order must also meet
/// the minimum amount).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VoucherCondition {
    /// Order subtotal must reach this amount.
    MinimumAmount(Money),
    /// Delivery ward must be one of these.
    Location(BTreeSet<WardId>),
    /// Cart must contain one of these products, or a product in one of
    /// these categories.
    ProductScope {
        products: BTreeSet<ProductId>,
        categories: BTreeSet<CategoryId>,
    },
}

impl VoucherCondition {
    /// Condition restricting delivery to the given wards.
    pub fn locations(wards: impl IntoIterator<Item = WardId>) -> Self {
        VoucherCondition::Location(wards.into_iter().collect())
    }

    /// Condition requiring one of the given products in the cart.
    pub fn products(ids: impl IntoIterator<Item = ProductId>) -> Self {
        VoucherCondition::ProductScope {
            products: ids.into_iter().collect(),
            categories: BTreeSet::new(),
        }
    }

    /// Condition requiring a product from one of the given categories.
    pub fn categories(ids: impl IntoIterator<Item = CategoryId>) -> Self {
        VoucherCondition::ProductScope {
            products: BTreeSet::new(),
            categories: ids.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_locations_collects_wards() {
        let condition =
            VoucherCondition::locations([WardId::new("ward-1"), WardId::new("ward-2")]);
        match condition {
            VoucherCondition::Location(wards) => {
                assert!(wards.contains(&WardId::new("ward-1")));
                assert_eq!(wards.len(), 2);
            }
            _ => panic!("expected a location condition"),
        }
    }

    #[test]
    fn test_condition_serializes() {
        let condition = VoucherCondition::MinimumAmount(Money::new(100_000, Currency::VND));
        let json = serde_json::to_string(&condition).unwrap();
        let back: VoucherCondition = serde_json::from_str(&json).unwrap();
        assert_eq!(condition, back);
    }
}
