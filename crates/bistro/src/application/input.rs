//! Integer input with re-prompting
//!
//! Each answer is validated on its own ([`parse_integer`]); how often a
//! rejected answer may be retried is decided by a [`RetryPolicy`].

use crate::domain::{errors::DomainError, value_objects::RetryPolicy};
use crate::ports::Console;

pub const INVALID_NUMBER_MESSAGE: &str = "Invalid input. Please enter a number.";

/// Parse one input line the way a stream extraction would.
///
/// Leading whitespace is skipped, an optional sign and the leading digits
/// form the number, and anything after them is discarded. A blank line
/// yields `Ok(None)` (nothing typed yet).
pub fn parse_integer(line: &str) -> Result<Option<i32>, DomainError> {
    let text = line.trim_start();
    if text.is_empty() {
        return Ok(None);
    }

    let sign_len = usize::from(text.starts_with(|c: char| c == '+' || c == '-'));
    let digits = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits == 0 {
        return Err(DomainError::InvalidInteger(line.to_string()));
    }

    text[..sign_len + digits]
        .parse::<i32>()
        .map(Some)
        .map_err(|_| DomainError::InvalidInteger(line.to_string()))
}

/// Prompt until the console yields an integer.
///
/// Malformed answers print an error and the prompt is shown again.
/// Fails only when the input ends or the retry policy gives up.
pub fn read_integer<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    policy: RetryPolicy,
) -> Result<i32, DomainError> {
    let mut failures = 0u32;

    loop {
        console.write(prompt)?;

        let answer = loop {
            let line = console.read_line()?.ok_or(DomainError::InputClosed)?;
            match parse_integer(&line) {
                Ok(None) => continue,
                Ok(Some(value)) => break Ok(value),
                Err(e) => break Err(e),
            }
        };

        match answer {
            Ok(value) => return Ok(value),
            Err(e) => {
                failures = failures.saturating_add(1);
                tracing::debug!(error = %e, failures, "Rejected integer input");
                console.write_line(INVALID_NUMBER_MESSAGE)?;

                if !policy.allows_retry(failures) {
                    return Err(DomainError::RetriesExhausted { attempts: failures });
                }
            }
        }
    }
}
