//! Path management for budget-analysis
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_ANALYSIS_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/budget-analysis` on Linux,
//!    `~/Library/Application Support/budget-analysis` on macOS,
//!    `%APPDATA%\budget-analysis\config` on Windows)

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::BudgetError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "BUDGET_ANALYSIS_CONFIG_DIR";

/// Manages all paths used by budget-analysis
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory holding config.json
    config_dir: PathBuf,
}

impl AppPaths {
    /// Resolve the config directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { config_dir })
    }

    /// Create AppPaths with a custom config directory (useful for testing)
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.config_dir).map_err(|e| {
            BudgetError::Io(format!("Failed to create config directory: {}", e))
        })
    }
}

fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    ProjectDirs::from("", "", "budget-analysis")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BudgetError::Config("Could not determine home directory".into()))
}
