#![forbid(unsafe_code)]

//! Ordered collection of currently open dialogs.
//!
//! Push on open; removal is by id identity and may target any position, not
//! just the top — a lower dialog can close first. Keyboard activation always
//! targets the last element.
//!
//! # Failure modes
//!
//! - `remove` of an absent id returns `None` (no panic, no state change).
//! - `top` / `top_mut` on an empty stack return `None`.

use super::instance::AlertDialog;
use super::DialogId;

/// Stack of open dialogs, bottom to top.
#[derive(Debug, Default)]
pub struct DialogStack {
    dialogs: Vec<AlertDialog>,
}

impl DialogStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no dialog is open.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }

    /// Number of open dialogs.
    #[inline]
    pub fn depth(&self) -> usize {
        self.dialogs.len()
    }

    /// Push a dialog onto the top of the stack.
    pub fn push(&mut self, dialog: AlertDialog) {
        self.dialogs.push(dialog);
    }

    /// Remove a dialog by id, from any position. Returns `None` if absent.
    pub fn remove(&mut self, id: &DialogId) -> Option<AlertDialog> {
        let index = self.dialogs.iter().position(|d| d.id() == id)?;
        Some(self.dialogs.remove(index))
    }

    /// The keyboard-active dialog: the top of the stack.
    pub fn top(&self) -> Option<&AlertDialog> {
        self.dialogs.last()
    }

    /// Mutable access to the keyboard-active dialog.
    pub fn top_mut(&mut self) -> Option<&mut AlertDialog> {
        self.dialogs.last_mut()
    }

    /// Id of the keyboard-active dialog.
    pub fn top_id(&self) -> Option<DialogId> {
        self.dialogs.last().map(|d| d.id().clone())
    }

    /// Whether a dialog with this id is open.
    pub fn contains(&self, id: &DialogId) -> bool {
        self.dialogs.iter().any(|d| d.id() == id)
    }

    /// Look up an open dialog by id.
    pub fn get(&self, id: &DialogId) -> Option<&AlertDialog> {
        self.dialogs.iter().find(|d| d.id() == id)
    }
}
