//! Application Layer (Use Cases)
//!
//! Interactive flows that drive the domain through the console port.

pub mod input;
pub mod intake;
pub mod main_menu;
pub mod report;
mod session;

pub use input::{parse_integer, read_integer};
pub use intake::take_order;
pub use main_menu::{run, LoopExit};
pub use report::print_sales_report;
pub use session::Session;
