//! Voucher definition types.

use crate::error::CommerceError;
use crate::ids::VoucherId;
use crate::money::Money;
use crate::rate::Rate;
use crate::voucher::VoucherCondition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a voucher takes off the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VoucherDiscount {
    /// Fraction of the subtotal.
    Percentage(Rate),
    /// Fixed amount off, capped at the subtotal.
    FixedAmount(Money),
}

impl VoucherDiscount {
    pub fn kind(&self) -> &'static str {
        match self {
            VoucherDiscount::Percentage(_) => "percentage",
            VoucherDiscount::FixedAmount(_) => "fixed_amount",
        }
    }
}

/// A redeemable discount code.
///
/// `used_count` is a snapshot read alongside the definition; the
/// evaluator treats it as valid as of that read. The order placement
/// transaction owns the increment and must re-check the limit under a
/// row lock at commit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voucher {
    /// Unique voucher identifier.
    pub id: VoucherId,
    /// Redemption code (e.g., "SALE10").
    pub code: String,
    /// What the voucher takes off.
    pub discount: VoucherDiscount,
    /// Maximum total redemptions (None = unlimited).
    pub usage_limit: Option<i64>,
    /// Redemptions recorded so far.
    pub used_count: i64,
    /// First instant the voucher is redeemable.
    pub starts_at: DateTime<Utc>,
    /// Last instant the voucher is redeemable.
    pub ends_at: DateTime<Utc>,
    /// Eligibility conditions, all of which must hold.
    pub conditions: Vec<VoucherCondition>,
}

impl Voucher {
    /// Create a new voucher with no conditions and no usage limit.
    pub fn new(
        id: VoucherId,
        code: impl Into<String>,
        discount: VoucherDiscount,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            discount,
            usage_limit: None,
            used_count: 0,
            starts_at,
            ends_at,
            conditions: Vec::new(),
        }
    }

    /// Create a percentage voucher.
    pub fn percentage(
        id: VoucherId,
        code: impl Into<String>,
        rate: Rate,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Self {
        Self::new(id, code, VoucherDiscount::Percentage(rate), starts_at, ends_at)
    }

    /// Create a fixed-amount voucher.
    pub fn fixed_amount(
        id: VoucherId,
        code: impl Into<String>,
        amount: Money,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Self {
        Self::new(id, code, VoucherDiscount::FixedAmount(amount), starts_at, ends_at)
    }

    /// Add a usage limit.
    pub fn with_usage_limit(mut self, limit: i64) -> Self {
        self.usage_limit = Some(limit);
        self
    }

    /// Set the recorded redemption count.
    pub fn with_used_count(mut self, count: i64) -> Self {
        self.used_count = count;
        self
    }

    /// Add an eligibility condition.
    pub fn with_condition(mut self, condition: VoucherCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Check the definition for malformed data.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.starts_at > self.ends_at {
            return Err(CommerceError::VoucherWindowInverted {
                code: self.code.clone(),
            });
        }
        Ok(())
    }

    /// Check if the redemption limit has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.usage_limit
            .map(|limit| self.used_count >= limit)
            .unwrap_or(false)
    }

    /// Check if the validity window has opened.
    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        now >= self.starts_at
    }

    /// Check if the validity window has closed.
    pub fn has_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.ends_at
    }
}
