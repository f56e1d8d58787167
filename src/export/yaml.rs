//! YAML Export functionality
//!
//! Exports the session report to YAML format for human reading.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::BudgetReport;
use crate::session::BudgetSummary;

/// Export the report to YAML format
pub fn export_report_yaml<W: Write>(
    summary: &BudgetSummary,
    symbol: &str,
    writer: &mut W,
) -> BudgetResult<()> {
    let report = BudgetReport::from_summary(summary, symbol);

    writeln!(writer, "# Budget Analysis Report")
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", report.generated_at)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# Amounts are in cents.")
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &report).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_summary;

    #[test]
    fn test_yaml_export() {
        let mut buffer = Vec::new();
        export_report_yaml(&sample_summary(), "$", &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# Budget Analysis Report"));
        assert!(text.contains("status: under_budget"));

        let report: BudgetReport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(report.total.cents(), 50_000);
    }
}
