//! Report export
//!
//! Writes the evaluated session to a file:
//! - JSON: machine-readable report with schema versioning
//! - YAML: the same report, human-readable
//! - CSV: one row per expense plus a total row (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_report_csv;
pub use json::{export_report_json, BudgetReport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::session::BudgetSummary;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Write the report in the given format
pub fn export_report<W: Write>(
    summary: &BudgetSummary,
    symbol: &str,
    format: ExportFormat,
    writer: &mut W,
) -> BudgetResult<()> {
    match format {
        ExportFormat::Json => export_report_json(summary, symbol, writer),
        ExportFormat::Yaml => export_report_yaml(summary, symbol, writer),
        ExportFormat::Csv => export_report_csv(summary, writer),
    }
}

/// Write the report to `path`; the format defaults to the file extension, then JSON
pub fn export_to_file(
    summary: &BudgetSummary,
    symbol: &str,
    path: &Path,
    format: Option<ExportFormat>,
) -> BudgetResult<ExportFormat> {
    let format = format
        .or_else(|| ExportFormat::from_path(path))
        .unwrap_or(ExportFormat::Json);

    let file = File::create(path).map_err(|e| {
        BudgetError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    export_report(summary, symbol, format, &mut writer)?;
    writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    info!(path = %path.display(), ?format, "Report exported");
    Ok(format)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::{BudgetOutcome, Expense, ExpenseCategory, Money};
    use crate::session::BudgetSummary;

    pub fn sample_summary() -> BudgetSummary {
        let expenses = vec![
            Expense::fixed(ExpenseCategory::Housing, Money::from_dollars(200)),
            Expense::fixed(ExpenseCategory::Travel, Money::from_dollars(100)),
            Expense::fixed(ExpenseCategory::Mess, Money::from_dollars(100)),
            Expense::extra(1, Money::from_dollars(100)),
        ];
        BudgetSummary {
            budget: Money::from_dollars(1000),
            expenses,
            total: Money::from_dollars(500),
            outcome: BudgetOutcome::UnderBudget {
                surplus: Money::from_dollars(500),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::sample_summary;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("a.JSON")), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_path(Path::new("a.yml")), Some(ExportFormat::Yaml));
        assert_eq!(ExportFormat::from_path(Path::new("a.csv")), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::from_path(Path::new("report")), None);
    }

    #[test]
    fn test_export_to_file_uses_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.csv");

        let format = export_to_file(&sample_summary(), "$", &path, None).unwrap();
        assert_eq!(format, ExportFormat::Csv);
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("label,kind,amount"));
    }

    #[test]
    fn test_export_to_file_defaults_to_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report");

        let format = export_to_file(&sample_summary(), "$", &path, None).unwrap();
        assert_eq!(format, ExportFormat::Json);
        let report: BudgetReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(report.expenses.len(), 4);
    }

    #[test]
    fn test_export_to_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope").join("report.json");

        let err = export_to_file(&sample_summary(), "$", &path, None).unwrap_err();
        assert!(matches!(err, BudgetError::Export(_)));
    }
}
