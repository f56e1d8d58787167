//! Core data models for budget-analysis
//!
//! Money amounts, the expenses collected during a session, and the outcome
//! of comparing them against the budget.

pub mod expense;
pub mod money;
pub mod outcome;

pub use expense::{Expense, ExpenseCategory, ExpenseKind};
pub use money::{Money, MoneyParseError};
pub use outcome::BudgetOutcome;
