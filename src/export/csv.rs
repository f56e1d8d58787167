//! CSV Export functionality
//!
//! One row per expense, then a `Total` row. Amounts are plain decimals.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::ExpenseKind;
use crate::session::BudgetSummary;

/// Export the expense breakdown to CSV
pub fn export_report_csv<W: Write>(summary: &BudgetSummary, writer: &mut W) -> BudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let export_err = |e: csv::Error| BudgetError::Export(e.to_string());

    csv_writer
        .write_record(["label", "kind", "amount"])
        .map_err(export_err)?;

    for expense in &summary.expenses {
        let kind = match expense.kind {
            ExpenseKind::Fixed(_) => "fixed",
            ExpenseKind::Extra(_) => "extra",
        };
        csv_writer
            .write_record([
                expense.label().as_str(),
                kind,
                expense.amount.to_decimal_string().as_str(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .write_record(["Total", "total", summary.total.to_decimal_string().as_str()])
        .map_err(export_err)?;
    csv_writer
        .write_record(["Budget", "budget", summary.budget.to_decimal_string().as_str()])
        .map_err(export_err)?;

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}
