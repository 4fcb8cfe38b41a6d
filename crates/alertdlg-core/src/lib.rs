#![forbid(unsafe_code)]

//! Host-side primitives for the alertdlg dialog subsystem.
//!
//! This crate owns everything the dialog widgets need from their host
//! environment, kept deliberately headless:
//!
//! - [`page`]: a retained element tree with an attribute map and focus
//!   tracking, standing in for the host document.
//! - [`event`]: the keyboard event model consumed by the focus trap.
//! - [`uid`]: session-unique id generation for dialog fragments.

pub mod event;
pub mod page;
pub mod uid;

pub use event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use page::{NodeId, Page};
