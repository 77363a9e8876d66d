//! One-screen text popups.

use std::io::{BufRead, Write};

use crate::config::LoopConfig;
use crate::error::EngineResult;

/// A block of text the player reads and dismisses, such as an item
/// description. There are no choices; any line of input closes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    text: String,
}

impl Popup {
    /// A popup showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The text shown.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Print the text and wait for one line of input (or its end).
    pub fn show<R, W>(&self, input: &mut R, output: &mut W, config: &LoopConfig) -> EngineResult<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "{}", self.text)?;
        writeln!(output)?;
        writeln!(output, "{}", config.continue_prompt)?;
        output.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
        Ok(())
    }
}
