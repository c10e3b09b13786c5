//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the application layer
//! talks to the outside world (the terminal).
//!
//! Implementations of these traits live in `adapters/`.

mod console;

pub use console::*;
