//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod currency;
mod menu_choice;
mod money;
mod retry_policy;

pub use currency::*;
pub use menu_choice::*;
pub use money::*;
pub use retry_policy::*;
