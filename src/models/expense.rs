//! Expense entries collected during a session
//!
//! Three fixed categories are always asked for, in order. Any number of
//! ad-hoc extra expenses may follow.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// The fixed expense categories, asked in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Housing,
    Travel,
    Mess,
}

impl ExpenseCategory {
    /// All fixed categories in prompt order
    pub const ALL: [ExpenseCategory; 3] = [Self::Housing, Self::Travel, Self::Mess];

    /// Prompt text shown when asking for this category
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Housing => "Enter housing expenses:",
            Self::Travel => "Enter Travel expenses:",
            Self::Mess => "Enter Mess expenses:",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Travel => "Travel",
            Self::Mess => "Mess",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where an expense came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ExpenseKind {
    /// One of the three fixed categories
    Fixed(ExpenseCategory),
    /// The n-th extra expense, starting at 1
    Extra(usize),
}

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub kind: ExpenseKind,
    pub amount: Money,
}

impl Expense {
    pub fn fixed(category: ExpenseCategory, amount: Money) -> Self {
        Self {
            kind: ExpenseKind::Fixed(category),
            amount,
        }
    }

    pub fn extra(index: usize, amount: Money) -> Self {
        Self {
            kind: ExpenseKind::Extra(index),
            amount,
        }
    }

    /// Human-readable label ("Housing", "Extra 2")
    pub fn label(&self) -> String {
        match self.kind {
            ExpenseKind::Fixed(category) => category.label().to_string(),
            ExpenseKind::Extra(index) => format!("Extra {}", index),
        }
    }

    pub fn is_extra(&self) -> bool {
        matches!(self.kind, ExpenseKind::Extra(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_and_prompts() {
        let prompts: Vec<_> = ExpenseCategory::ALL.iter().map(|c| c.prompt()).collect();
        assert_eq!(
            prompts,
            vec![
                "Enter housing expenses:",
                "Enter Travel expenses:",
                "Enter Mess expenses:"
            ]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Expense::fixed(ExpenseCategory::Mess, Money::zero()).label(), "Mess");
        assert_eq!(Expense::extra(2, Money::zero()).label(), "Extra 2");
        assert!(Expense::extra(1, Money::zero()).is_extra());
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::fixed(ExpenseCategory::Housing, Money::from_cents(30000));
        let json = serde_json::to_string(&expense).unwrap();
        assert_eq!(
            json,
            r#"{"kind":{"type":"fixed","value":"housing"},"amount":30000}"#
        );
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expense);
    }
}
