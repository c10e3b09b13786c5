//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not a number: {0:?}")]
    InvalidInteger(String),

    #[error("Selection {choice} is out of range (1-{max})")]
    SelectionOutOfRange { choice: i32, max: usize },

    #[error("Console input closed")]
    InputClosed,

    #[error("Gave up after {attempts} invalid answers")]
    RetriesExhausted { attempts: u32 },

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DomainError {
    pub fn validation<T: AsRef<str>>(message: T) -> Self {
        Self::Validation(message.as_ref().to_string())
    }
}
