//! JSON Export functionality
//!
//! Exports the session report to JSON format with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetOutcome, Expense, Money};
use crate::session::BudgetSummary;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported session report. Amounts are in cents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetReport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub generated_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub currency_symbol: String,

    pub budget: Money,

    /// Fixed expenses first, then extras in entry order
    pub expenses: Vec<Expense>,

    pub total: Money,

    /// Budget minus total
    pub balance: Money,

    pub outcome: BudgetOutcome,

    /// The message shown at the end of the run
    pub message: String,
}

impl BudgetReport {
    pub fn from_summary(summary: &BudgetSummary, symbol: &str) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency_symbol: symbol.to_string(),
            budget: summary.budget,
            expenses: summary.expenses.clone(),
            total: summary.total,
            balance: summary.balance(),
            outcome: summary.outcome,
            message: summary.message(symbol),
        }
    }
}

/// Export the report to JSON format
pub fn export_report_json<W: Write>(
    summary: &BudgetSummary,
    symbol: &str,
    writer: &mut W,
) -> BudgetResult<()> {
    let report = BudgetReport::from_summary(summary, symbol);
    serde_json::to_writer_pretty(&mut *writer, &report)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_summary;

    #[test]
    fn test_json_export() {
        let mut buffer = Vec::new();
        export_report_json(&sample_summary(), "$", &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["budget"], 100_000);
        assert_eq!(value["total"], 50_000);
        assert_eq!(value["balance"], 50_000);
        assert_eq!(value["outcome"]["status"], "under_budget");
        assert_eq!(value["outcome"]["surplus"], 50_000);
        assert_eq!(value["expenses"][3]["kind"]["type"], "extra");
        assert_eq!(
            value["message"],
            "You are under budget by $500.00\nTotal monthly expenses = $500.00"
        );
    }

    #[test]
    fn test_json_report_reads_back() {
        let mut buffer = Vec::new();
        export_report_json(&sample_summary(), "$", &mut buffer).unwrap();

        let report: BudgetReport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(report.expenses, sample_summary().expenses);
        assert_eq!(report.outcome, sample_summary().outcome);
    }
}
