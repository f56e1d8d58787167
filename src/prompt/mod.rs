//! Prompt boundary between the session logic and the user
//!
//! A [`Prompter`] asks for numbers, asks yes/no/cancel questions, and shows
//! messages. The session only talks to this trait, so the same run works
//! against a terminal, full-screen dialogs, or a scripted answer list.

pub mod dialog;
pub mod scripted;
pub mod terminal;

pub use dialog::DialogPrompter;
pub use scripted::ScriptedPrompter;
pub use terminal::TerminalPrompter;

use tracing::warn;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;

/// Answer to a yes/no/cancel question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    /// The question was dismissed without an answer
    Cancelled,
}

impl Confirmation {
    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Yes)
    }

    /// Interpret a typed reply. Unrecognised text counts as "No".
    pub fn from_reply(reply: &str) -> Self {
        match reply.trim().to_lowercase().as_str() {
            "y" | "yes" => Self::Yes,
            "c" | "cancel" => Self::Cancelled,
            _ => Self::No,
        }
    }
}

/// Blocking prompt/response I/O
pub trait Prompter {
    /// Ask for a line of text. `None` means the prompt was dismissed.
    fn ask_text(&mut self, prompt: &str) -> BudgetResult<Option<String>>;

    /// Ask a yes/no/cancel question
    fn confirm(&mut self, prompt: &str, title: &str) -> BudgetResult<Confirmation>;

    /// Show a message and wait for it to be acknowledged
    fn show_message(&mut self, message: &str) -> BudgetResult<()>;

    /// Show an error message. Defaults to [`Prompter::show_message`].
    fn show_error(&mut self, message: &str) -> BudgetResult<()> {
        self.show_message(message)
    }

    /// Ask for an amount, failing on the first unparseable reply
    fn ask_number(&mut self, prompt: &str) -> BudgetResult<Money> {
        match self.ask_text(prompt)? {
            Some(reply) => Ok(Money::parse(&reply)?),
            None => Err(BudgetError::dismissed(prompt)),
        }
    }
}

/// Ask for an amount, allowing up to `attempts` tries on malformed replies
///
/// With one attempt this is the same as [`Prompter::ask_number`]. Dismissal
/// is never retried.
pub fn ask_money<P: Prompter + ?Sized>(
    prompter: &mut P,
    prompt: &str,
    attempts: u32,
) -> BudgetResult<Money> {
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match prompter.ask_number(prompt) {
            Err(BudgetError::InvalidNumberFormat { input }) if attempt < attempts => {
                warn!(attempt, %input, "Rejected non-numeric reply");
                prompter.show_error(&format!(
                    "'{}' is not a valid number. Please try again.",
                    input
                ))?;
                attempt += 1;
            }
            other => return other,
        }
    }
}
