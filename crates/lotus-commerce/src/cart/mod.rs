//! Cart lines and aggregation.
//!
//! A cart is a transient list of [`CartLine`] snapshots; [`aggregate`]
//! collapses it into priced line items and an authoritative subtotal.

mod line;
mod pricing;

pub use line::CartLine;
pub use pricing::{aggregate, PricedCart, PricedLine};
