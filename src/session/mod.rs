//! Budget session
//!
//! Collects the budget and expenses through a [`Prompter`](crate::prompt::Prompter),
//! classifies the total, and presents the outcome.

pub mod runner;
pub mod state;

pub use runner::{run_and_release, run_session, BUDGET_PROMPT, EXTRA_EXPENSE_PROMPT, MORE_EXPENSES_PROMPT};
pub use state::{BudgetSession, BudgetSummary, SessionState};
