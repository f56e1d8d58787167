//! Modal dialogs
//!
//! Input, confirmation, and message dialogs. Key handling is separate from
//! rendering so dialog behavior can be tested without a terminal.

pub mod confirm;
pub mod input;
pub mod message;

pub use confirm::ConfirmDialog;
pub use input::InputDialog;
pub use message::MessageDialog;

/// What a dialog decided after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    /// Still waiting for input
    Pending,
    /// The dialog produced a value
    Done(T),
    /// The dialog was closed without a value
    Dismissed,
}
