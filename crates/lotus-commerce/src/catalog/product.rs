//! Product snapshot types.

use crate::catalog::ProductDiscount;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use crate::rate::Rate;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A read-time snapshot of a catalog product.
///
/// Price, discount window, and stock are captured when the cart is read;
/// the core prices against this snapshot and never consults the catalog
/// store again within one computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Undiscounted unit price.
    pub price: Money,
    /// Time-bounded percentage discount, if one is configured.
    pub discount: Option<ProductDiscount>,
    /// Units in stock at snapshot time.
    pub stock_quantity: i64,
    /// Categories this product belongs to.
    pub category_ids: Vec<CategoryId>,
}

impl ProductSnapshot {
    /// Create a new snapshot with no discount and no categories.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        stock_quantity: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            discount: None,
            stock_quantity,
            category_ids: Vec::new(),
        }
    }

    /// Attach a discount window.
    pub fn with_discount(
        mut self,
        percent: Rate,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Self {
        self.discount = Some(ProductDiscount::new(percent, starts_at, ends_at));
        self
    }

    /// Add a category.
    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        if !self.category_ids.contains(&category_id) {
            self.category_ids.push(category_id);
        }
        self
    }

    /// Check if the product's discount window covers the given instant.
    pub fn has_active_discount(&self, now: DateTime<Utc>) -> bool {
        self.discount.map(|d| d.is_active(now)).unwrap_or(false)
    }

    /// The exact effective unit price in minor units, unrounded.
    ///
    /// Line totals are accumulated from this value so the cart subtotal
    /// rounds exactly once.
    pub fn effective_unit_minor(&self, now: DateTime<Utc>) -> Decimal {
        let base = self.price.to_minor_decimal();
        match self.discount {
            Some(d) if d.is_active(now) => d.percent.complement().of_minor(base),
            _ => base,
        }
    }

    /// The effective unit price at the given instant, rounded half-up to
    /// the nearest minor unit for display.
    pub fn effective_price(&self, now: DateTime<Utc>) -> Money {
        Money::from_minor_decimal(self.effective_unit_minor(now), self.price.currency)
            .unwrap_or(self.price)
    }

    /// Check if the snapshot can cover a requested quantity.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        self.stock_quantity >= quantity
    }

    /// Check if the product is out of stock.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock_quantity <= 0
    }

    /// Check if the product belongs to a category.
    pub fn in_category(&self, category_id: &CategoryId) -> bool {
        self.category_ids.contains(category_id)
    }
}
