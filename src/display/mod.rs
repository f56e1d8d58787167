//! Display formatting for terminal output
//!
//! Renders the post-run report: expense breakdown, balance, and budget usage.

pub mod report;

pub use report::{format_bar, format_report};
