//! Full-screen dialog prompter
//!
//! Every prompt is a modal ratatui dialog. The terminal is put into raw mode
//! on the alternate screen for the life of the prompter and restored on drop.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::warn;

use super::{Confirmation, Prompter};
use crate::error::BudgetResult;
use crate::tui::dialogs::{ConfirmDialog, DialogOutcome, InputDialog, MessageDialog};
use crate::tui::terminal::tui_error;
use crate::tui::{init_terminal, restore_terminal, Tui};

/// Title shown on every dialog
pub const APP_TITLE: &str = "Budget Analysis App";

/// Prompter backed by modal terminal dialogs
pub struct DialogPrompter {
    terminal: Tui,
}

impl DialogPrompter {
    /// Take over the terminal
    pub fn new() -> BudgetResult<Self> {
        Ok(Self {
            terminal: init_terminal()?,
        })
    }

    /// Block until the next key press
    fn next_key(&mut self) -> BudgetResult<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read().map_err(tui_error)? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }

    fn show(&mut self, mut dialog: MessageDialog) -> BudgetResult<()> {
        loop {
            self.terminal
                .draw(|frame| dialog.render(frame))
                .map_err(tui_error)?;
            let key = self.next_key()?;
            if dialog.handle_key(key) {
                return Ok(());
            }
        }
    }
}

impl Prompter for DialogPrompter {
    fn ask_text(&mut self, prompt: &str) -> BudgetResult<Option<String>> {
        let mut dialog = InputDialog::new(APP_TITLE, prompt);
        loop {
            self.terminal
                .draw(|frame| dialog.render(frame))
                .map_err(tui_error)?;
            let key = self.next_key()?;
            match dialog.handle_key(key) {
                DialogOutcome::Pending => {}
                DialogOutcome::Done(value) => return Ok(Some(value)),
                DialogOutcome::Dismissed => return Ok(None),
            }
        }
    }

    fn confirm(&mut self, prompt: &str, title: &str) -> BudgetResult<Confirmation> {
        let mut dialog = ConfirmDialog::new(title, prompt);
        loop {
            self.terminal
                .draw(|frame| dialog.render(frame))
                .map_err(tui_error)?;
            let key = self.next_key()?;
            match dialog.handle_key(key) {
                DialogOutcome::Pending => {}
                DialogOutcome::Done(answer) => return Ok(answer),
                DialogOutcome::Dismissed => return Ok(Confirmation::Cancelled),
            }
        }
    }

    fn show_message(&mut self, message: &str) -> BudgetResult<()> {
        self.show(MessageDialog::info(APP_TITLE, message))
    }

    fn show_error(&mut self, message: &str) -> BudgetResult<()> {
        self.show(MessageDialog::error("Invalid Input", message))
    }
}

impl Drop for DialogPrompter {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}
