//! Report formatting for terminal output
//!
//! Builds the breakdown printed after the outcome message.

use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use crate::session::BudgetSummary;

const BAR_WIDTH: usize = 30;

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Expense")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the full post-run report
pub fn format_report(summary: &BudgetSummary, symbol: &str) -> String {
    let mut rows: Vec<BreakdownRow> = summary
        .expenses
        .iter()
        .map(|expense| BreakdownRow {
            label: expense.label(),
            amount: expense.amount.format_with_symbol(symbol),
        })
        .collect();
    rows.push(BreakdownRow {
        label: "Total".to_string(),
        amount: summary.total.format_with_symbol(symbol),
    });

    let table = Table::new(rows)
        .with(Style::rounded())
        .modify(Columns::single(1), Alignment::right())
        .to_string();

    let usage = summary.total.ratio_of(summary.budget).unwrap_or(0.0);

    let mut out = String::new();
    out.push_str("Expense Breakdown\n");
    out.push_str(&table);
    out.push('\n');
    out.push_str(&format!(
        "Budget:         {}\n",
        summary.budget.format_with_symbol(symbol)
    ));
    out.push_str(&format!(
        "Budget Balance: {}\n",
        summary.balance().format_with_symbol(symbol)
    ));
    out.push_str(&format!(
        "Budget Usage:   {} {}\n",
        format_bar(usage, 1.0, BAR_WIDTH),
        format_percentage(usage * 100.0)
    ));
    out
}

/// Create a simple bar chart representation, capped at full width
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a percentage with appropriate precision
fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetOutcome, Expense, ExpenseCategory, Money};

    fn summary() -> BudgetSummary {
        let expenses = vec![
            Expense::fixed(ExpenseCategory::Housing, Money::from_dollars(300)),
            Expense::fixed(ExpenseCategory::Travel, Money::from_dollars(100)),
            Expense::fixed(ExpenseCategory::Mess, Money::from_dollars(200)),
            Expense::extra(1, Money::from_cents(1050)),
        ];
        let total: Money = expenses.iter().map(|e| e.amount).sum();
        let budget = Money::from_dollars(1000);
        BudgetSummary {
            budget,
            expenses,
            total,
            outcome: BudgetOutcome::classify(total, budget).unwrap(),
        }
    }

    #[test]
    fn test_format_report_lists_every_expense() {
        let report = format_report(&summary(), "$");
        for needle in ["Housing", "Travel", "Mess", "Extra 1", "$10.50", "Total", "$610.50"] {
            assert!(report.contains(needle), "missing {:?} in\n{}", needle, report);
        }
        assert!(report.contains("Budget Balance: $389.50"));
        assert!(report.contains("61%"));
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(0.5, 1.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(3.0, 1.0, 4), "████");
        assert_eq!(format_bar(0.5, 0.0, 4), "░░░░");
        assert_eq!(format_bar(-1.0, 1.0, 4), "░░░░");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(61.05), "61%");
    }
}
