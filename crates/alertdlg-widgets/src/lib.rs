#![forbid(unsafe_code)]

//! Accessible modal alert-dialog subsystem.
//!
//! The widgets here are headless: they mutate an [`alertdlg_core::Page`]
//! instead of a real document, which keeps the focus-management and
//! keyboard-navigation state machine (the only non-trivial logic of the
//! component) fully testable.
//!
//! See [`dialog`] for the full module family: dialog instance lifecycle,
//! content construction with the ARIA contract, focus trap, dialog stack,
//! screen-reader veil, and the manager tying them together.

pub mod dialog;

pub use dialog::{
    AlertDialog, DialogClosed, DialogContent, DialogError, DialogId, DialogManager, DialogOutcome,
};
