//! Domain Services
//!
//! Stateless menu presentation and the billing ledger.

pub mod billing;
pub mod presenter;

pub use billing::SalesLedger;
pub use presenter::{present, DisplayIndexMap, MenuPresentation};
