//! Domain Entities
//!
//! Pure domain models without console dependencies.
//! - MenuItem: One orderable item
//! - Catalog: The fixed menu
//! - Order: Draft and billed orders (one per table visit)
//! - Sales: Running day and month totals

mod catalog;
mod menu_item;
mod order;
mod sales;

pub use catalog::*;
pub use menu_item::*;
pub use order::*;
pub use sales::*;
