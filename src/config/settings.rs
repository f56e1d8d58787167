//! User settings for budget-analysis
//!
//! Manages display and interaction preferences: currency symbol, the cap on
//! extra expenses, how malformed numbers are handled, and the default frontend.

use serde::{Deserialize, Serialize};

use super::paths::AppPaths;
use crate::error::BudgetError;

/// What to do when a reply cannot be read as a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvalidInputPolicy {
    /// Abort the run with `InvalidNumberFormat`
    #[default]
    Abort,
    /// Show the error and ask again, up to `max_attempts` times
    Retry,
}

/// Which prompt frontend to use for interactive runs
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Frontend {
    /// Line-based prompts on stdin/stdout
    #[default]
    Prompt,
    /// Full-screen modal dialogs
    Dialog,
}

/// User settings for budget-analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in messages and reports
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Upper bound on extra expenses collected in one run; unbounded when absent
    #[serde(default)]
    pub max_extra_expenses: Option<usize>,

    #[serde(default)]
    pub on_invalid_input: InvalidInputPolicy,

    /// Attempts per prompt under the retry policy
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default)]
    pub frontend: Frontend,

    /// Print the expense breakdown after the outcome message
    #[serde(default = "default_show_breakdown")]
    pub show_breakdown: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_max_attempts() -> u32 {
    3
}

fn default_show_breakdown() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            max_extra_expenses: None,
            on_invalid_input: InvalidInputPolicy::default(),
            max_attempts: default_max_attempts(),
            frontend: Frontend::default(),
            show_breakdown: default_show_breakdown(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &AppPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AppPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Number of attempts a numeric prompt gets before the error is fatal
    pub fn attempts_per_prompt(&self) -> u32 {
        match self.on_invalid_input {
            InvalidInputPolicy::Abort => 1,
            InvalidInputPolicy::Retry => self.max_attempts.max(1),
        }
    }

    /// Settings for a run whose replies are all given up front
    ///
    /// A re-asked prompt would consume the reply meant for the next prompt,
    /// so malformed input always aborts.
    pub fn for_batch(&self) -> Self {
        Self {
            on_invalid_input: InvalidInputPolicy::Abort,
            ..self.clone()
        }
    }
}
