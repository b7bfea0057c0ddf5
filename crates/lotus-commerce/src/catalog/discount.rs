//! Time-bounded product discounts.

use crate::rate::Rate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A percentage discount attached to a product for a fixed window.
///
/// The discount applies only while `starts_at <= now <= ends_at`; both
/// endpoints are inclusive. A window with `starts_at` after `ends_at`
/// contains no instant and is therefore never active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDiscount {
    /// Fraction taken off the price while the window is active.
    pub percent: Rate,
    /// First instant the discount applies.
    pub starts_at: DateTime<Utc>,
    /// Last instant the discount applies.
    pub ends_at: DateTime<Utc>,
}

impl ProductDiscount {
    /// Create a new product discount.
    pub fn new(percent: Rate, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        Self {
            percent,
            starts_at,
            ends_at,
        }
    }

    /// Check if the discount window covers the given instant.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.starts_at <= now && now <= self.ends_at
    }
}
