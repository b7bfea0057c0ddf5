//! Checkout totals and shipping.
//!
//! [`totalize`] is the single place `subtotal + shipping - discount` is
//! computed; every surface that shows a payable amount depends on it.

mod quote;
mod shipping;
mod totals;

pub use quote::{AppliedVoucher, CheckoutQuote};
pub use shipping::ShippingMethod;
pub use totals::{totalize, CheckoutTotal};
