//! Line-based terminal prompter
//!
//! Writes each prompt to the output and reads one line of reply. End of
//! input dismisses the prompt.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use super::{Confirmation, Prompter};
use crate::error::{BudgetError, BudgetResult};

/// Prompts on any reader/writer pair (stdin/stdout in the binary)
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the prompter and return the writer (used by tests)
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> BudgetResult<Option<String>> {
        let mut input = String::new();
        let read = self
            .reader
            .read_line(&mut input)
            .map_err(|e| BudgetError::Io(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            // End of input: move past the unanswered prompt
            writeln!(self.writer)?;
            return Ok(None);
        }

        Ok(Some(input.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask_text(&mut self, prompt: &str) -> BudgetResult<Option<String>> {
        write!(self.writer, "{} ", prompt)?;
        self.writer.flush()?;
        self.read_line()
    }

    fn confirm(&mut self, prompt: &str, _title: &str) -> BudgetResult<Confirmation> {
        write!(self.writer, "{} (yes/no/cancel) [no]: ", prompt)?;
        self.writer.flush()?;

        Ok(match self.read_line()? {
            Some(reply) => Confirmation::from_reply(&reply),
            None => Confirmation::Cancelled,
        })
    }

    fn show_message(&mut self, message: &str) -> BudgetResult<()> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()?;
        Ok(())
    }
}
