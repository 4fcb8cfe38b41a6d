#![forbid(unsafe_code)]

//! Focus trap: the keyboard state machine of the active dialog.
//!
//! Driven by key events only; the trap never touches the page itself, it
//! tells the manager what to do via [`TrapAction`].
//!
//! # Invariants
//!
//! - `active_index` is always within `0..cycle_len`.
//! - Tab wraps forward past the last button to the first; Shift+Tab wraps
//!   backward from the first to the last.
//! - Escape maps to an unconditional dismiss, never to confirm or reject.
//!
//! The reverse direction is latched on Shift key-down and cleared on Shift
//! key-up; the SHIFT modifier carried by the Tab event itself also counts,
//! so hosts that only deliver modifier flags still cycle backward.

use alertdlg_core::event::{KeyCode, KeyEvent, KeyEventKind};

/// What the manager should do in response to a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapAction {
    /// Move focus to the button at this index of the cycle.
    FocusButton(usize),
    /// Close the active dialog with no callback side effects.
    Dismiss,
}

/// Keyboard navigation state for one dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTrap {
    active_index: usize,
    cycle_len: usize,
    reverse: bool,
}

impl FocusTrap {
    /// Create a trap over a fixed cycle of `cycle_len` buttons, starting at
    /// index 0.
    pub fn new(cycle_len: usize) -> Self {
        debug_assert!(cycle_len > 0, "focus cycle cannot be empty");
        Self {
            active_index: 0,
            cycle_len: cycle_len.max(1),
            reverse: false,
        }
    }

    /// Index of the current keyboard focus target.
    #[inline]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Number of buttons in the cycle.
    #[inline]
    pub fn cycle_len(&self) -> usize {
        self.cycle_len
    }

    /// Feed one key event through the state machine.
    pub fn on_key(&mut self, event: &KeyEvent) -> Option<TrapAction> {
        match (event.code, event.kind) {
            (KeyCode::Shift, KeyEventKind::Press) => {
                self.reverse = true;
                None
            }
            (KeyCode::Shift, KeyEventKind::Release) => {
                self.reverse = false;
                None
            }
            (KeyCode::Escape, KeyEventKind::Press) => Some(TrapAction::Dismiss),
            (KeyCode::Tab, KeyEventKind::Press) => {
                let backward = self.reverse || event.shift_down();
                self.active_index = if backward {
                    self.active_index
                        .checked_sub(1)
                        .unwrap_or(self.cycle_len - 1)
                } else {
                    (self.active_index + 1) % self.cycle_len
                };
                Some(TrapAction::FocusButton(self.active_index))
            }
            _ => None,
        }
    }
}
