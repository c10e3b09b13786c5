//! Bistro - Restaurant order and sales tracker
//!
//! Keeps a fixed menu, registers orders per table, prints itemized bills
//! and accumulates running day and month sales totals.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: MenuItem, Catalog, DraftOrder/BilledOrder, SalesAggregate
//!   - `value_objects/`: Money, Currency, RetryPolicy, MenuChoice
//!   - `services/`: Menu presenter, sales ledger
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): The `Console` trait
//!
//! - **Application** (`application/`): Session context, input helper,
//!   order intake, sales report, main menu loop
//!
//! - **Adapters** (`adapters/`): stdio and in-memory consoles
//!
//! # Usage
//!
//! ```rust,no_run
//! use bistro::{BufferedConsole, Session};
//!
//! let mut session = Session::default();
//! let mut console = BufferedConsole::new(["2", "3"]);
//! bistro::application::run(&mut session, &mut console).unwrap();
//! println!("{}", console.output());
//! ```

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use adapters::{BufferedConsole, StdConsole};
pub use application::{LoopExit, Session};
pub use domain::{
    BilledOrder, Catalog, Currency, DisplayIndexMap, DomainError, DraftOrder, MenuChoice,
    MenuItem, MenuPresentation, Money, OrderLine, RetryPolicy, SalesAggregate, SalesLedger,
};
pub use ports::Console;
