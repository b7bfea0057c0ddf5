//! Voucher eligibility evaluation.
//!
//! [`evaluate`] is the read-path decision function: given a voucher
//! definition and a snapshot of customer, cart, and instant, it reports
//! whether the voucher is redeemable and, if not, the first reason it is
//! not. Checks run in a fixed order so the reported reason is
//! deterministic. The function never mutates `used_count` or `is_used`.

use crate::cart::CartLine;
use crate::error::CommerceError;
use crate::ids::WardId;
use crate::money::Money;
use crate::voucher::{Voucher, VoucherCondition, VoucherWallet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a voucher was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    /// The validity window has not opened yet.
    NotStarted,
    /// The validity window has closed.
    Expired,
    /// The voucher's total redemption limit is spent.
    UsageLimitReached,
    /// This customer has already redeemed the voucher.
    AlreadyUsed,
    /// The order subtotal is below the required minimum.
    MinimumAmountNotMet,
    /// The delivery ward is not covered.
    LocationNotEligible,
    /// No cart line falls in the voucher's product scope.
    ProductNotEligible,
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::NotStarted => "not_started",
            RejectionReason::Expired => "expired",
            RejectionReason::UsageLimitReached => "usage_limit_reached",
            RejectionReason::AlreadyUsed => "already_used",
            RejectionReason::MinimumAmountNotMet => "minimum_amount_not_met",
            RejectionReason::LocationNotEligible => "location_not_eligible",
            RejectionReason::ProductNotEligible => "product_not_eligible",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of one eligibility evaluation.
///
/// Computed fresh per call and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// Every check passed; the voucher may be applied.
    Eligible,
    /// A check failed; the first failing reason is reported.
    Rejected(RejectionReason),
}

impl Evaluation {
    /// Check if the voucher may be applied.
    pub fn is_eligible(&self) -> bool {
        matches!(self, Evaluation::Eligible)
    }

    /// The rejection reason, if any.
    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            Evaluation::Eligible => None,
            Evaluation::Rejected(reason) => Some(*reason),
        }
    }
}

/// Everything an eligibility decision is made against.
///
/// All fields are snapshots owned by the caller; evaluation borrows them
/// for the duration of one call.
#[derive(Debug)]
pub struct RedemptionContext<'a> {
    /// The customer's claimed vouchers.
    pub wallet: &'a VoucherWallet,
    /// Delivery ward, when an address has been chosen.
    pub ward: Option<&'a WardId>,
    /// Cart subtotal from the aggregator.
    pub subtotal: Money,
    /// The cart lines the subtotal was computed from.
    pub lines: &'a [CartLine],
    /// Evaluation instant.
    pub now: DateTime<Utc>,
}

/// Decide whether a voucher is redeemable in the given context.
///
/// Checks run in this order, and the first failure wins: validity
/// window, total usage limit, per-customer prior use, minimum amount,
/// delivery location, product scope. Conditions of the same variant are
/// OR'd; different variants are AND'd.
///
/// # Errors
///
/// [`CommerceError::VoucherWindowInverted`] for a definition whose
/// window is inverted, and [`CommerceError::CurrencyMismatch`] when a
/// minimum-amount condition is denominated in a different currency than
/// the subtotal. Both indicate upstream data bugs, not customer-facing
/// rejections.
pub fn evaluate(
    voucher: &Voucher,
    ctx: &RedemptionContext<'_>,
) -> Result<Evaluation, CommerceError> {
    voucher.validate()?;

    if !voucher.has_started(ctx.now) {
        return Ok(reject(voucher, RejectionReason::NotStarted));
    }
    if voucher.has_expired(ctx.now) {
        return Ok(reject(voucher, RejectionReason::Expired));
    }

    if voucher.is_exhausted() {
        return Ok(reject(voucher, RejectionReason::UsageLimitReached));
    }

    if ctx
        .wallet
        .get(&voucher.id)
        .map(|claim| claim.is_used)
        .unwrap_or(false)
    {
        return Ok(reject(voucher, RejectionReason::AlreadyUsed));
    }

    if !minimum_amount_met(voucher, ctx.subtotal)? {
        return Ok(reject(voucher, RejectionReason::MinimumAmountNotMet));
    }

    if !location_eligible(voucher, ctx.ward) {
        return Ok(reject(voucher, RejectionReason::LocationNotEligible));
    }

    if !product_scope_matched(voucher, ctx.lines) {
        return Ok(reject(voucher, RejectionReason::ProductNotEligible));
    }

    Ok(Evaluation::Eligible)
}

fn reject(voucher: &Voucher, reason: RejectionReason) -> Evaluation {
    tracing::debug!(voucher = %voucher.code, reason = reason.as_str(), "voucher rejected");
    Evaluation::Rejected(reason)
}

/// True when no minimum-amount condition exists, or the subtotal reaches
/// at least one of them.
fn minimum_amount_met(voucher: &Voucher, subtotal: Money) -> Result<bool, CommerceError> {
    let mut present = false;
    let mut met = false;
    for condition in &voucher.conditions {
        if let VoucherCondition::MinimumAmount(threshold) = condition {
            present = true;
            if threshold.currency != subtotal.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: subtotal.currency.code().to_string(),
                    got: threshold.currency.code().to_string(),
                });
            }
            if subtotal.amount >= threshold.amount {
                met = true;
            }
        }
    }
    Ok(!present || met)
}

/// True when no location condition exists, or the ward appears in one of
/// the allowed sets. A missing ward fails any location condition.
fn location_eligible(voucher: &Voucher, ward: Option<&WardId>) -> bool {
    let mut present = false;
    let mut allowed = false;
    for condition in &voucher.conditions {
        if let VoucherCondition::Location(wards) = condition {
            present = true;
            if let Some(ward) = ward {
                if wards.contains(ward) {
                    allowed = true;
                }
            }
        }
    }
    !present || allowed
}

/// True when no product-scope condition exists, or some cart line hits
/// one of the scoped products or categories.
fn product_scope_matched(voucher: &Voucher, lines: &[CartLine]) -> bool {
    let mut present = false;
    let mut matched = false;
    for condition in &voucher.conditions {
        if let VoucherCondition::ProductScope {
            products,
            categories,
        } = condition
        {
            present = true;
            if lines.iter().any(|line| {
                products.contains(&line.product.id)
                    || line
                        .product
                        .category_ids
                        .iter()
                        .any(|c| categories.contains(c))
            }) {
                matched = true;
            }
        }
    }
    !present || matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductSnapshot;
    use crate::ids::{CategoryId, CustomerId, ProductId, VoucherId};
    use crate::money::Currency;
    use crate::rate::Rate;
    use chrono::TimeZone;

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, day, 0, 0, 0).unwrap()
    }

    fn vnd(amount: i64) -> Money {
        Money::new(amount, Currency::VND)
    }

    fn voucher() -> Voucher {
        Voucher::percentage(
            VoucherId::new("vchr-1"),
            "SALE10",
            Rate::from_percent(10),
            ts(1),
            ts(10),
        )
    }

    fn lines() -> Vec<CartLine> {
        vec![
            CartLine::new(
                ProductSnapshot::new(ProductId::new("prod-1"), "Ceramic mug", vnd(45_000), 10)
                    .with_category(CategoryId::new("cat-mugs")),
                2,
            )
            .unwrap(),
            CartLine::new(
                ProductSnapshot::new(ProductId::new("prod-2"), "Tea tin", vnd(110_000), 5),
                1,
            )
            .unwrap(),
        ]
    }

    fn ctx<'a>(
        wallet: &'a VoucherWallet,
        ward: Option<&'a WardId>,
        lines: &'a [CartLine],
    ) -> RedemptionContext<'a> {
        RedemptionContext {
            wallet,
            ward,
            subtotal: vnd(200_000),
            lines,
            now: ts(5),
        }
    }

    fn empty_wallet() -> VoucherWallet {
        VoucherWallet::new(CustomerId::new("cust-1"))
    }

    #[test]
    fn test_unconditional_voucher_is_eligible() {
        let wallet = empty_wallet();
        let lines = lines();
        let result = evaluate(&voucher(), &ctx(&wallet, None, &lines)).unwrap();
        assert!(result.is_eligible());
        assert_eq!(result.rejection(), None);
    }

    #[test]
    fn test_not_started_and_expired() {
        let wallet = empty_wallet();
        let lines = lines();
        let mut context = ctx(&wallet, None, &lines);

        context.now = Utc.with_ymd_and_hms(2026, 7, 31, 0, 0, 0).unwrap();
        let result = evaluate(&voucher(), &context).unwrap();
        assert_eq!(result.rejection(), Some(RejectionReason::NotStarted));

        context.now = ts(11);
        let result = evaluate(&voucher(), &context).unwrap();
        assert_eq!(result.rejection(), Some(RejectionReason::Expired));
    }

    #[test]
    fn test_window_endpoints_are_redeemable() {
        let wallet = empty_wallet();
        let lines = lines();
        let mut context = ctx(&wallet, None, &lines);

        context.now = ts(1);
        assert!(evaluate(&voucher(), &context).unwrap().is_eligible());
        context.now = ts(10);
        assert!(evaluate(&voucher(), &context).unwrap().is_eligible());
    }

    #[test]
    fn test_expired_wins_over_minimum_amount() {
        // Fixed check order: a voucher that is both expired and under
        // the minimum must report the temporal failure.
        let v = voucher().with_condition(VoucherCondition::MinimumAmount(vnd(500_000)));
        let wallet = empty_wallet();
        let lines = lines();
        let mut context = ctx(&wallet, None, &lines);
        context.now = ts(11);

        let result = evaluate(&v, &context).unwrap();
        assert_eq!(result.rejection(), Some(RejectionReason::Expired));
    }

    #[test]
    fn test_usage_limit_boundary() {
        let wallet = empty_wallet();
        let lines = lines();
        let context = ctx(&wallet, None, &lines);

        let v = voucher().with_usage_limit(5).with_used_count(5);
        let result = evaluate(&v, &context).unwrap();
        assert_eq!(result.rejection(), Some(RejectionReason::UsageLimitReached));

        let v = voucher().with_usage_limit(5).with_used_count(4);
        assert!(evaluate(&v, &context).unwrap().is_eligible());
    }

    #[test]
    fn test_already_used_by_customer() {
        let mut wallet = empty_wallet();
        wallet.claim(VoucherId::new("vchr-1"), ts(2));
        wallet.mark_used(&VoucherId::new("vchr-1"));
        let lines = lines();

        let result = evaluate(&voucher(), &ctx(&wallet, None, &lines)).unwrap();
        assert_eq!(result.rejection(), Some(RejectionReason::AlreadyUsed));
    }

    #[test]
    fn test_claimed_but_unused_passes() {
        let mut wallet = empty_wallet();
        wallet.claim(VoucherId::new("vchr-1"), ts(2));
        let lines = lines();

        assert!(evaluate(&voucher(), &ctx(&wallet, None, &lines))
            .unwrap()
            .is_eligible());
    }

    #[test]
    fn test_minimum_amount() {
        let wallet = empty_wallet();
        let lines = lines();
        let context = ctx(&wallet, None, &lines);

        let v = voucher().with_condition(VoucherCondition::MinimumAmount(vnd(500_000)));
        let result = evaluate(&v, &context).unwrap();
        assert_eq!(result.rejection(), Some(RejectionReason::MinimumAmountNotMet));

        let v = voucher().with_condition(VoucherCondition::MinimumAmount(vnd(200_000)));
        assert!(evaluate(&v, &context).unwrap().is_eligible());
    }

    #[test]
    fn test_location_conditions_or_together() {
        let v = voucher()
            .with_condition(VoucherCondition::locations([WardId::new("ward-1")]))
            .with_condition(VoucherCondition::locations([WardId::new("ward-2")]));
        let wallet = empty_wallet();
        let lines = lines();

        let ward = WardId::new("ward-2");
        assert!(evaluate(&v, &ctx(&wallet, Some(&ward), &lines))
            .unwrap()
            .is_eligible());

        let ward = WardId::new("ward-9");
        let result = evaluate(&v, &ctx(&wallet, Some(&ward), &lines)).unwrap();
        assert_eq!(result.rejection(), Some(RejectionReason::LocationNotEligible));
    }

    #[test]
    fn test_missing_ward_fails_location_condition() {
        let v = voucher().with_condition(VoucherCondition::locations([WardId::new("ward-1")]));
        let wallet = empty_wallet();
        let lines = lines();

        let result = evaluate(&v, &ctx(&wallet, None, &lines)).unwrap();
        assert_eq!(result.rejection(), Some(RejectionReason::LocationNotEligible));
    }

    #[test]
    fn test_product_scope_by_product() {
        let wallet = empty_wallet();
        let lines = lines();
        let context = ctx(&wallet, None, &lines);

        let v = voucher().with_condition(VoucherCondition::products([ProductId::new("prod-2")]));
        assert!(evaluate(&v, &context).unwrap().is_eligible());

        let v = voucher().with_condition(VoucherCondition::products([ProductId::new("prod-9")]));
        let result = evaluate(&v, &context).unwrap();
        assert_eq!(result.rejection(), Some(RejectionReason::ProductNotEligible));
    }

    #[test]
    fn test_product_scope_by_category() {
        let wallet = empty_wallet();
        let lines = lines();
        let context = ctx(&wallet, None, &lines);

        let v = voucher().with_condition(VoucherCondition::categories([CategoryId::new("cat-mugs")]));
        assert!(evaluate(&v, &context).unwrap().is_eligible());
    }

    #[test]
    fn test_cross_type_conditions_and_together() {
        // Meets the minimum but misses the location: rejected.
        let ward = WardId::new("ward-9");
        let v = voucher()
            .with_condition(VoucherCondition::MinimumAmount(vnd(100_000)))
            .with_condition(VoucherCondition::locations([WardId::new("ward-1")]));
        let wallet = empty_wallet();
        let lines = lines();

        let result = evaluate(&v, &ctx(&wallet, Some(&ward), &lines)).unwrap();
        assert_eq!(result.rejection(), Some(RejectionReason::LocationNotEligible));
    }

    #[test]
    fn test_inverted_window_is_a_data_error() {
        let mut v = voucher();
        v.starts_at = ts(10);
        v.ends_at = ts(1);
        let wallet = empty_wallet();
        let lines = lines();

        let err = evaluate(&v, &ctx(&wallet, None, &lines)).unwrap_err();
        assert!(err.is_data_integrity());
    }

    #[test]
    fn test_evaluation_never_mutates_inputs() {
        let v = voucher().with_usage_limit(5).with_used_count(4);
        let before = v.clone();
        let wallet = empty_wallet();
        let lines = lines();

        evaluate(&v, &ctx(&wallet, None, &lines)).unwrap();
        assert_eq!(v, before);
        assert!(wallet.is_empty());
    }
}
