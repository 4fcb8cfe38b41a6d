#![forbid(unsafe_code)]

//! Keyboard event model.
//!
//! Only the keys the dialog focus trap cares about are modeled as distinct
//! codes; everything else arrives as [`KeyCode::Char`] or [`KeyCode::Other`]
//! and is ignored by the widgets.
//!
//! Shift is observable two ways, mirroring real host behavior: as a
//! [`KeyCode::Shift`] press/release pair, and as [`Modifiers::SHIFT`] on the
//! event that carries the actual key. The focus trap honors both.

use bitflags::bitflags;

/// A key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Tab key (focus traversal).
    Tab,
    /// Escape key (dismiss).
    Escape,
    /// Enter key.
    Enter,
    /// Shift key itself (direction latch for the focus trap).
    Shift,
    /// A printable character.
    Char(char),
    /// Any key the dialog subsystem does not interpret.
    Other,
}

bitflags! {
    /// Modifier keys held while the event fired.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
    }
}

/// Whether the key went down or came back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    Press,
    Release,
}

/// A single keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a key-press event without modifiers.
    pub const fn press(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key-release event without modifiers.
    pub const fn release(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Release,
        }
    }

    /// Attach modifiers to the event.
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Whether Shift is held for this event, either as the modifier flag or
    /// because the event is the Shift key itself going down.
    pub fn shift_down(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
            || (self.code == KeyCode::Shift && self.kind == KeyEventKind::Press)
    }
}
