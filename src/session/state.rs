//! Session state machine
//!
//! `CollectingFixed -> CollectingExtra -> Evaluated -> Terminated`. The
//! session never moves backwards, and each recording call is only valid in
//! its own state.

use serde::Serialize;
use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetOutcome, Expense, ExpenseCategory, Money};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for housing, travel, and mess amounts
    CollectingFixed,
    /// Fixed amounts recorded; extra expenses may follow
    CollectingExtra,
    /// Total classified against the budget
    Evaluated,
    /// Outcome presented; nothing more to do
    Terminated,
}

/// One run's budget and expenses
#[derive(Debug, Clone)]
pub struct BudgetSession {
    budget: Money,
    fixed_expenses: Vec<(ExpenseCategory, Money)>,
    extra_expenses: Vec<Money>,
    state: SessionState,
}

/// The evaluated result of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub budget: Money,
    pub expenses: Vec<Expense>,
    pub total: Money,
    pub outcome: BudgetOutcome,
}

impl BudgetSummary {
    /// The outcome message with the given currency symbol
    pub fn message(&self, symbol: &str) -> String {
        self.outcome.message(self.total, symbol)
    }

    /// Budget minus total; negative when over budget
    pub fn balance(&self) -> Money {
        match self.outcome {
            BudgetOutcome::UnderBudget { surplus } => surplus,
            BudgetOutcome::OverBudget { deficit } => -deficit,
            BudgetOutcome::OnBudget => Money::zero(),
        }
    }
}

impl BudgetSession {
    pub fn new(budget: Money) -> Self {
        debug!(%budget, "Session started");
        Self {
            budget,
            fixed_expenses: Vec::with_capacity(ExpenseCategory::ALL.len()),
            extra_expenses: Vec::new(),
            state: SessionState::CollectingFixed,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The next fixed category to ask for, if any remain
    pub fn next_fixed_category(&self) -> Option<ExpenseCategory> {
        ExpenseCategory::ALL.get(self.fixed_expenses.len()).copied()
    }

    pub fn extra_count(&self) -> usize {
        self.extra_expenses.len()
    }

    /// All recorded expenses: fixed ones first, then extras in entry order
    pub fn expenses(&self) -> Vec<Expense> {
        self.fixed_expenses
            .iter()
            .map(|&(category, amount)| Expense::fixed(category, amount))
            .chain(
                self.extra_expenses
                    .iter()
                    .enumerate()
                    .map(|(i, &amount)| Expense::extra(i + 1, amount)),
            )
            .collect()
    }

    /// Sum of every recorded expense
    pub fn total(&self) -> Money {
        self.fixed_expenses
            .iter()
            .map(|(_, amount)| amount)
            .chain(self.extra_expenses.iter())
            .sum()
    }

    fn ensure_state(&self, expected: SessionState, action: &str) -> BudgetResult<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(BudgetError::Session(format!(
                "cannot {} while {:?}",
                action, self.state
            )))
        }
    }

    /// Reject amounts that would push the total out of range
    fn ensure_fits(&self, amount: Money) -> BudgetResult<()> {
        let total = self.total();
        total
            .checked_add(amount)
            .map(|_| ())
            .ok_or_else(|| BudgetError::Overflow {
                total: total.to_string(),
                amount: amount.to_string(),
            })
    }

    /// Record the amount for the next fixed category
    pub fn record_fixed(&mut self, amount: Money) -> BudgetResult<ExpenseCategory> {
        self.ensure_state(SessionState::CollectingFixed, "record a fixed expense")?;
        let category = self
            .next_fixed_category()
            .ok_or_else(|| BudgetError::Session("all fixed expenses recorded".into()))?;
        self.ensure_fits(amount)?;

        self.fixed_expenses.push((category, amount));
        debug!(%category, %amount, "Recorded fixed expense");

        if self.next_fixed_category().is_none() {
            self.state = SessionState::CollectingExtra;
            debug!(total = %self.total(), "Fixed expenses complete");
        }
        Ok(category)
    }

    /// Record one extra expense
    pub fn record_extra(&mut self, amount: Money) -> BudgetResult<()> {
        self.ensure_state(SessionState::CollectingExtra, "record an extra expense")?;
        self.ensure_fits(amount)?;

        self.extra_expenses.push(amount);
        debug!(index = self.extra_expenses.len(), %amount, "Recorded extra expense");
        Ok(())
    }

    /// Classify the total against the budget
    pub fn evaluate(&mut self) -> BudgetResult<BudgetSummary> {
        self.ensure_state(SessionState::CollectingExtra, "evaluate")?;

        let total = self.total();
        let outcome = BudgetOutcome::classify(total, self.budget)?;
        self.state = SessionState::Evaluated;
        debug!(%total, outcome = outcome.kind(), "Session evaluated");

        Ok(BudgetSummary {
            budget: self.budget,
            expenses: self.expenses(),
            total,
            outcome,
        })
    }

    /// Mark the outcome as presented
    pub fn terminate(&mut self) -> BudgetResult<()> {
        self.ensure_state(SessionState::Evaluated, "terminate")?;
        self.state = SessionState::Terminated;
        Ok(())
    }
}
