//! Catalog snapshot types.
//!
//! The core never reads the product store itself — it receives
//! [`ProductSnapshot`] values fetched by the caller and prices them at an
//! explicit instant.

mod discount;
mod product;

pub use discount::ProductDiscount;
pub use product::ProductSnapshot;
