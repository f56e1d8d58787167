//! Budget outcome classification
//!
//! Compares a total against the budget and renders the final message.

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{BudgetError, BudgetResult};

/// Result of comparing total expenses against the budget
///
/// Exactly one variant holds for any `(total, budget)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BudgetOutcome {
    UnderBudget { surplus: Money },
    OverBudget { deficit: Money },
    OnBudget,
}

impl BudgetOutcome {
    /// Classify a total against a budget
    pub fn classify(total: Money, budget: Money) -> BudgetResult<Self> {
        let overflow = || BudgetError::Overflow {
            total: total.to_string(),
            amount: budget.to_string(),
        };

        Ok(match total.cmp(&budget) {
            std::cmp::Ordering::Less => Self::UnderBudget {
                surplus: budget.checked_sub(total).ok_or_else(overflow)?,
            },
            std::cmp::Ordering::Greater => Self::OverBudget {
                deficit: total.checked_sub(budget).ok_or_else(overflow)?,
            },
            std::cmp::Ordering::Equal => Self::OnBudget,
        })
    }

    /// Short machine-friendly name
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnderBudget { .. } => "under_budget",
            Self::OverBudget { .. } => "over_budget",
            Self::OnBudget => "on_budget",
        }
    }

    /// Render the outcome message shown to the user
    pub fn message(&self, total: Money, symbol: &str) -> String {
        let total = total.format_with_symbol(symbol);
        match self {
            Self::UnderBudget { surplus } => format!(
                "You are under budget by {}\nTotal monthly expenses = {}",
                surplus.format_with_symbol(symbol),
                total
            ),
            Self::OverBudget { deficit } => format!(
                "You are over budget by {}\nTotal monthly expenses = {}",
                deficit.format_with_symbol(symbol),
                total
            ),
            Self::OnBudget => format!("You are on budget. Total expenses = {}", total),
        }
    }
}
