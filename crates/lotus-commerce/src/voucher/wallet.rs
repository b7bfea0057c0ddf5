//! Customer voucher wallet.

use crate::ids::{CustomerId, VoucherId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer's claimed instance of a voucher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimedVoucher {
    /// The voucher claimed.
    pub voucher_id: VoucherId,
    /// When the customer claimed it.
    pub claimed_at: DateTime<Utc>,
    /// Whether the customer has already redeemed it.
    pub is_used: bool,
}

/// The set of vouchers a customer has claimed.
///
/// A customer holds a given voucher at most once; [`VoucherWallet::claim`]
/// dedups. Marking a claim used belongs to the order placement service
/// and happens only after its transaction commits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoucherWallet {
    /// Owning customer.
    pub customer_id: CustomerId,
    claims: Vec<ClaimedVoucher>,
}

impl VoucherWallet {
    /// Create an empty wallet.
    pub fn new(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            claims: Vec::new(),
        }
    }

    /// Claim a voucher. Returns `false` if the wallet already holds it.
    pub fn claim(&mut self, voucher_id: VoucherId, now: DateTime<Utc>) -> bool {
        if self.get(&voucher_id).is_some() {
            return false;
        }
        self.claims.push(ClaimedVoucher {
            voucher_id,
            claimed_at: now,
            is_used: false,
        });
        true
    }

    /// Look up a claim.
    pub fn get(&self, voucher_id: &VoucherId) -> Option<&ClaimedVoucher> {
        self.claims.iter().find(|c| &c.voucher_id == voucher_id)
    }

    /// Record a redemption. Returns `false` if the wallet holds no such
    /// claim.
    pub fn mark_used(&mut self, voucher_id: &VoucherId) -> bool {
        match self.claims.iter_mut().find(|c| &c.voucher_id == voucher_id) {
            Some(claim) => {
                claim.is_used = true;
                true
            }
            None => false,
        }
    }

    /// Iterate over the claims.
    pub fn iter(&self) -> impl Iterator<Item = &ClaimedVoucher> {
        self.claims.iter()
    }

    /// Number of claimed vouchers.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Check if the wallet is empty.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}
