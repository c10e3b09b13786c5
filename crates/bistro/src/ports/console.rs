//! Console Port
//!
//! Line-oriented terminal abstraction used by every interactive flow.

use std::io;

/// Console interface for prompts and output
pub trait Console {
    /// Write text as-is (prompts are written without a newline)
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Read the next input line without its line terminator.
    /// Returns `Ok(None)` once the input stream has ended.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write text followed by a newline
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}
