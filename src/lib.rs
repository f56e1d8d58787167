//! budget-analysis - Monthly budget check from the terminal
//!
//! Asks for a monthly budget and the housing, travel, and mess expenses,
//! optionally collects extra expenses, and reports whether the total is
//! under, over, or exactly on budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, expenses, and budget outcomes
//! - `session`: The session state machine and the run loop
//! - `prompt`: The prompt boundary and its frontends
//! - `tui`: Modal dialogs used by the dialog frontend
//! - `display`: Post-run report formatting
//! - `export`: JSON, YAML, and CSV report export
//!
//! # Example
//!
//! ```
//! use budget_analysis::config::Settings;
//! use budget_analysis::prompt::ScriptedPrompter;
//! use budget_analysis::session::run_session;
//!
//! let mut prompter = ScriptedPrompter::for_run("1000", ["300", "100", "200"], Vec::<&str>::new());
//! let summary = run_session(&mut prompter, &Settings::default()).unwrap();
//! assert_eq!(
//!     summary.message("$"),
//!     "You are under budget by $400.00\nTotal monthly expenses = $600.00"
//! );
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod prompt;
pub mod session;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
