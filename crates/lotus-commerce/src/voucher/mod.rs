//! Voucher definitions, eligibility evaluation, and discount computation.
//!
//! The evaluator is a pure decision function: it reports why a voucher
//! is or is not redeemable for a snapshot of customer, cart, and instant,
//! and never mutates usage state. Recording a redemption is the order
//! placement service's transaction, not this module's.

mod condition;
mod discount;
mod evaluate;
mod voucher;
mod wallet;

pub use condition::VoucherCondition;
pub use discount::discount_amount;
pub use evaluate::{evaluate, Evaluation, RedemptionContext, RejectionReason};
pub use voucher::{Voucher, VoucherDiscount};
pub use wallet::{ClaimedVoucher, VoucherWallet};
