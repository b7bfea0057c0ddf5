//! Commerce error types.

use thiserror::Error;

/// Errors that can occur while pricing a cart or redeeming a voucher.
///
/// Voucher rejections are *not* errors — they are reported as
/// [`Evaluation::Rejected`](crate::voucher::Evaluation) values so the
/// storefront can show them to the customer. The variants here signal
/// either malformed upstream data or an input the cart cannot accept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Cart line quantity is zero or negative.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Requested quantity exceeds the product's stock snapshot.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: String,
        requested: i64,
        available: i64,
    },

    /// Two monetary values in different currencies were combined.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Voucher validity window has `starts_at` after `ends_at`.
    #[error("Voucher {code} has an inverted validity window")]
    VoucherWindowInverted { code: String },
}

impl CommerceError {
    /// Whether this error indicates corrupt upstream data rather than a
    /// condition the customer can resolve.
    ///
    /// Data-integrity errors are logged and surfaced as a generic failure;
    /// the rest (e.g. [`CommerceError::InsufficientStock`]) are rendered
    /// to the customer directly.
    pub fn is_data_integrity(&self) -> bool {
        match self {
            CommerceError::InvalidQuantity(_)
            | CommerceError::CurrencyMismatch { .. }
            | CommerceError::Overflow
            | CommerceError::VoucherWindowInverted { .. } => true,
            CommerceError::InsufficientStock { .. } => false,
        }
    }
}
