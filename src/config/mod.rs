//! Configuration module for budget-analysis
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{Frontend, InvalidInputPolicy, Settings};
