//! In-memory console with scripted input and captured output

use std::collections::VecDeque;
use std::io;

use crate::ports::Console;

/// Console that replays scripted input lines and records everything written
#[derive(Debug, Default)]
pub struct BufferedConsole {
    input: VecDeque<String>,
    output: String,
}

impl BufferedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    /// Everything written so far
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Input lines not consumed yet
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for BufferedConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }
}
