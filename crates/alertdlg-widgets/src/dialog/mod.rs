#![forbid(unsafe_code)]

//! Modal alert-dialog family: instance lifecycle, content construction,
//! focus trap, dialog stack, screen-reader veil, and the manager.
//!
//! # Control flow
//!
//! A caller builds an [`AlertDialog`] from a [`DialogContent`], attaches
//! optional confirm/reject callbacks, and hands it to
//! [`DialogManager::open`]. The manager materializes the dialog fragment in a
//! lazily-created container, pushes the dialog onto the stack, veils the rest
//! of the page from assistive technology, and routes keyboard and click input
//! to the topmost dialog until a close path fires. Closing pops the dialog,
//! invokes at most one of its callbacks, and either reactivates the new top
//! dialog or lifts the veil and restores focus to the element that held it
//! before the dialog opened.
//!
//! # Invariants
//!
//! - At most one dialog has input handling attached at any time: the last
//!   element of the stack, or none when the stack is empty.
//! - The veil is applied iff the stack is non-empty.
//! - Each callback is invoked at most once, selected by the close path.

mod content;
mod instance;
mod manager;
mod stack;
mod trap;
mod veil;

use std::fmt;
use std::sync::Arc;

pub use content::{
    CLOSE_BUTTON_LABEL, DEFAULT_CONFIRM_LABEL, DEFAULT_QUESTION_TEXT, DEFAULT_REJECT_LABEL,
    DEFAULT_TITLE, DEFAULT_WARNING_TEXT, DialogContent, DialogDom,
};
pub use instance::{AlertDialog, DialogCallback};
pub use manager::{DialogManager, FOCUS_DELAY};
pub use stack::DialogStack;
pub use trap::{FocusTrap, TrapAction};
pub use veil::ScreenReaderVeil;

/// Session-unique identity of a dialog instance.
///
/// The same string is written to the fragment's `id` attribute, so stack
/// membership and document lookups agree on identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialogId(Arc<str>);

impl DialogId {
    pub(crate) fn new(raw: String) -> Self {
        Self(raw.into())
    }

    /// The id as written to the fragment's `id` attribute.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a dialog was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Confirm button, or the close (×) button — a confirm alias.
    Confirmed,
    /// Reject button.
    Rejected,
    /// Escape, or an explicit close with no action; no callback fires.
    Dismissed,
}

/// Completion notification returned by every close path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogClosed {
    /// Which dialog closed.
    pub id: DialogId,
    /// Which path closed it.
    pub outcome: DialogOutcome,
}

/// Programmer-error class failures of the dialog subsystem.
///
/// There is no recovery concept; these fail fast during development rather
/// than being runtime conditions to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogError {
    /// `open` was called on an instance that is already open.
    AlreadyOpen,
    /// An expected page node is missing (e.g. the dialog container was
    /// removed out from under the manager).
    MissingNode(&'static str),
}

impl fmt::Display for DialogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyOpen => write!(f, "dialog is already open"),
            Self::MissingNode(what) => write!(f, "expected page node is missing: {what}"),
        }
    }
}

impl std::error::Error for DialogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_id_displays_raw_string() {
        let id = DialogId::new("alert-dialog-abc".to_owned());
        assert_eq!(id.to_string(), "alert-dialog-abc");
        assert_eq!(id.as_str(), "alert-dialog-abc");
    }

    #[test]
    fn error_messages_name_the_failure() {
        assert_eq!(DialogError::AlreadyOpen.to_string(), "dialog is already open");
        assert_eq!(
            DialogError::MissingNode("dialog container").to_string(),
            "expected page node is missing: dialog container"
        );
    }
}
