//! Console Adapters
//!
//! Concrete implementations of the [`Console`](crate::ports::Console) port.

mod buffered;
mod stdio;

pub use buffered::BufferedConsole;
pub use stdio::StdConsole;
