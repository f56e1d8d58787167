//! Terminal dialogs for budget-analysis
//!
//! Full-screen modal dialogs built on ratatui and crossterm. Each dialog owns
//! its state, turns key presses into an outcome, and renders itself centered
//! on the screen.

pub mod dialogs;
pub mod layout;
pub mod terminal;
pub mod widgets;

pub use terminal::{init_terminal, restore_terminal, Tui};
