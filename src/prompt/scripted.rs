//! Scripted prompter
//!
//! Answers prompts from pre-filled queues. Used for batch runs from the
//! command line and for driving sessions in tests.

use std::collections::VecDeque;

use super::{Confirmation, Prompter};
use crate::error::BudgetResult;

/// A prompter fed from fixed lists of replies
///
/// When the text queue runs dry the prompt counts as dismissed; when the
/// confirmation queue runs dry the question counts as cancelled.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    replies: VecDeque<String>,
    confirmations: VecDeque<Confirmation>,
    asked: Vec<String>,
    messages: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(replies: I, confirmations: &[Confirmation]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            confirmations: confirmations.iter().copied().collect(),
            asked: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Build the script for one run: budget, the three fixed categories,
    /// then one "Yes" per extra expense followed by a final "No"
    pub fn for_run<S: Into<String>>(
        budget: S,
        fixed: [S; 3],
        extras: impl IntoIterator<Item = S>,
    ) -> Self {
        let extras: Vec<String> = extras.into_iter().map(Into::into).collect();
        let mut confirmations = vec![Confirmation::Yes; extras.len()];
        confirmations.push(Confirmation::No);

        let replies = std::iter::once(budget.into())
            .chain(fixed.into_iter().map(Into::into))
            .chain(extras);

        Self::new(replies, &confirmations)
    }

    /// Every prompt and question asked so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Every message and error shown so far, in order
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Replies not yet consumed
    pub fn remaining_replies(&self) -> usize {
        self.replies.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_text(&mut self, prompt: &str) -> BudgetResult<Option<String>> {
        self.asked.push(prompt.to_string());
        Ok(self.replies.pop_front())
    }

    fn confirm(&mut self, prompt: &str, _title: &str) -> BudgetResult<Confirmation> {
        self.asked.push(prompt.to_string());
        Ok(self
            .confirmations
            .pop_front()
            .unwrap_or(Confirmation::Cancelled))
    }

    fn show_message(&mut self, message: &str) -> BudgetResult<()> {
        self.messages.push(message.to_string());
        Ok(())
    }
}
