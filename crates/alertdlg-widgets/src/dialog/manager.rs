#![forbid(unsafe_code)]

//! Dialog manager: stack and veil coordination, input routing, and focus
//! restoration.
//!
//! One manager exists per page session. It owns the stack of open dialogs,
//! the lazily-created dialog container, the screen-reader veil, and the one
//! pending deferred-focus deadline.
//!
//! # Invariants
//!
//! - Input is routed to the top of the stack only; opening a dialog
//!   deactivates the previous top before activating the new one.
//! - The veil is applied when the stack becomes non-empty and lifted when it
//!   becomes empty again; removal from the stack happens before the
//!   emptiness check.
//! - The root-region set behind the veil is computed once, at first-open
//!   time, and never recomputed.
//!
//! # Failure modes
//!
//! - Closing an id that is not open is a no-op returning `None`.
//! - A deferred focus whose dialog closed (or was covered by a newer dialog)
//!   before the deadline never fires.

use alertdlg_core::event::KeyEvent;
use alertdlg_core::page::{NodeId, Page};
use web_time::{Duration, Instant};

use super::instance::AlertDialog;
use super::stack::DialogStack;
use super::trap::TrapAction;
use super::veil::ScreenReaderVeil;
use super::{DialogClosed, DialogError, DialogId, DialogOutcome};

/// Delay before focus is moved into a freshly activated dialog, so the
/// host's own post-insertion focus handling cannot override it.
pub const FOCUS_DELAY: Duration = Duration::from_millis(10);

/// Class attribute of the shared dialog container.
const CONTAINER_CLASS: &str = "alert-dialogs";

#[derive(Debug)]
struct PendingFocus {
    dialog: DialogId,
    due: Instant,
}

/// Per-page-session coordinator of all open alert dialogs.
#[derive(Debug, Default)]
pub struct DialogManager {
    container: Option<NodeId>,
    stack: DialogStack,
    veil: Option<ScreenReaderVeil>,
    pending_focus: Option<PendingFocus>,
}

impl DialogManager {
    /// Create a manager with no open dialogs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a dialog: materialize its fragment, push it onto the stack,
    /// apply the veil if this is the first open dialog, and activate its
    /// input handling.
    ///
    /// # Errors
    ///
    /// - [`DialogError::AlreadyOpen`] if the instance is already open.
    /// - [`DialogError::MissingNode`] if the dialog container was removed
    ///   from the page while dialogs were open.
    pub fn open(&mut self, page: &mut Page, mut dialog: AlertDialog) -> Result<DialogId, DialogError> {
        if dialog.is_open() {
            return Err(DialogError::AlreadyOpen);
        }
        let container = self.ensure_container(page)?;

        // Root regions are snapshotted exactly once per page session.
        if self.veil.is_none() {
            self.veil = Some(ScreenReaderVeil::collect(page, container));
        }

        dialog.open_into(page, container)?;
        let id = dialog.id().clone();

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("dialog_open", id = %id, depth = self.stack.depth()).entered();

        // Deactivate the previous top before activating the new dialog.
        self.pending_focus = None;

        let was_empty = self.stack.is_empty();
        self.stack.push(dialog);
        if was_empty && let Some(veil) = self.veil.as_mut() {
            veil.apply(page);
        }

        self.schedule_focus(id.clone());
        Ok(id)
    }

    /// Route a keyboard event to the active dialog.
    ///
    /// Tab/Shift+Tab cycle focus through the three buttons; Escape dismisses
    /// with no callback side effects. Returns the completion notification
    /// when the event closed the dialog.
    pub fn handle_key(&mut self, page: &mut Page, event: &KeyEvent) -> Option<DialogClosed> {
        let top = self.stack.top_mut()?;
        match top.trap_mut().on_key(event)? {
            TrapAction::FocusButton(index) => {
                if let Some(dom) = top.dom() {
                    page.focus(dom.buttons()[index]);
                }
                None
            }
            TrapAction::Dismiss => {
                let id = top.id().clone();
                self.close_by_id(page, &id, DialogOutcome::Dismissed)
            }
        }
    }

    /// Route a click to the active dialog's buttons.
    ///
    /// Confirm closes then fires the confirm callback; reject closes then
    /// fires the reject callback; the close (×) button is a confirm alias.
    /// Clicks on anything else — including buttons of a covered dialog —
    /// are ignored.
    pub fn click(&mut self, page: &mut Page, node: NodeId) -> Option<DialogClosed> {
        let top = self.stack.top()?;
        let dom = top.dom()?;
        let outcome = if node == dom.confirm_button || node == dom.close_button {
            DialogOutcome::Confirmed
        } else if node == dom.reject_button {
            DialogOutcome::Rejected
        } else {
            return None;
        };
        let id = top.id().clone();
        self.close_by_id(page, &id, outcome)
    }

    /// Close the active dialog as if its confirm button were clicked.
    pub fn confirm(&mut self, page: &mut Page) -> Option<DialogClosed> {
        let id = self.stack.top_id()?;
        self.close_by_id(page, &id, DialogOutcome::Confirmed)
    }

    /// Close the active dialog as if its reject button were clicked.
    pub fn reject(&mut self, page: &mut Page) -> Option<DialogClosed> {
        let id = self.stack.top_id()?;
        self.close_by_id(page, &id, DialogOutcome::Rejected)
    }

    /// Dismiss the active dialog with no callback side effects.
    pub fn dismiss(&mut self, page: &mut Page) -> Option<DialogClosed> {
        let id = self.stack.top_id()?;
        self.close_by_id(page, &id, DialogOutcome::Dismissed)
    }

    /// Dismiss a specific dialog, which need not be the topmost. No-op
    /// (returns `None`) when the id is not open.
    pub fn dismiss_by_id(&mut self, page: &mut Page, id: &DialogId) -> Option<DialogClosed> {
        self.close_by_id(page, id, DialogOutcome::Dismissed)
    }

    fn close_by_id(
        &mut self,
        page: &mut Page,
        id: &DialogId,
        outcome: DialogOutcome,
    ) -> Option<DialogClosed> {
        // Remove-before-veil-check; absent ids are a guarded no-op.
        let mut dialog = self.stack.remove(id)?;
        dialog.close_dom(page);

        #[cfg(feature = "tracing")]
        tracing::trace!(id = %id, ?outcome, depth = self.stack.depth(), "dialog_close");

        if self.pending_focus.as_ref().is_some_and(|p| &p.dialog == id) {
            self.pending_focus = None;
        }

        if self.stack.is_empty() {
            if let Some(veil) = self.veil.as_mut() {
                veil.lift(page);
            }
            if let Some(target) = dialog.cached_focus_target()
                && page.contains(target)
            {
                page.focus(target);
            }
        } else if let Some(top_id) = self.stack.top_id() {
            // Reactivate the new top: focus moves to its buttons.
            self.schedule_focus(top_id);
        }

        // Callback fires last, after all close work, and at most once.
        if let Some(callback) = dialog.take_callback(outcome) {
            callback();
        }

        Some(DialogClosed {
            id: id.clone(),
            outcome,
        })
    }

    fn schedule_focus(&mut self, dialog: DialogId) {
        self.pending_focus = Some(PendingFocus {
            dialog,
            due: Instant::now() + FOCUS_DELAY,
        });
    }

    /// Apply the pending deferred focus if its deadline has passed.
    /// Returns whether focus moved.
    pub fn poll_deferred_focus(&mut self, page: &mut Page) -> bool {
        let due = self
            .pending_focus
            .as_ref()
            .is_some_and(|p| Instant::now() >= p.due);
        if !due {
            return false;
        }
        self.flush_deferred_focus(page)
    }

    /// Apply the pending deferred focus immediately, regardless of deadline.
    /// Guarded: if the target dialog closed or was covered by a newer dialog,
    /// nothing happens.
    pub fn flush_deferred_focus(&mut self, page: &mut Page) -> bool {
        let Some(pending) = self.pending_focus.take() else {
            return false;
        };
        if self.stack.top_id().as_ref() != Some(&pending.dialog) {
            return false;
        }
        let Some(top) = self.stack.top() else {
            return false;
        };
        let Some(dom) = top.dom() else {
            return false;
        };
        page.focus(dom.buttons()[top.trap().active_index()])
    }

    fn ensure_container(&mut self, page: &mut Page) -> Result<NodeId, DialogError> {
        if let Some(container) = self.container {
            if page.is_connected(container) {
                return Ok(container);
            }
            if !self.stack.is_empty() {
                return Err(DialogError::MissingNode("dialog container"));
            }
            self.container = None;
        }

        // Reuse a container the host markup already carries.
        let existing = page
            .children(page.body())
            .iter()
            .copied()
            .find(|&child| page.attr(child, "class") == Some(CONTAINER_CLASS));
        let container = match existing {
            Some(node) => node,
            None => {
                let node = page.create_element("div");
                page.set_attr(node, "class", CONTAINER_CLASS);
                if !page.append_child(page.body(), node) {
                    return Err(DialogError::MissingNode("page body"));
                }
                node
            }
        };
        self.container = Some(container);
        Ok(container)
    }

    /// Number of open dialogs.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Whether no dialog is open.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Id of the keyboard-active dialog.
    pub fn top_id(&self) -> Option<DialogId> {
        self.stack.top_id()
    }

    /// Whether this dialog is currently open.
    pub fn contains(&self, id: &DialogId) -> bool {
        self.stack.contains(id)
    }

    /// Whether the page is currently veiled from assistive technology.
    pub fn is_veiled(&self) -> bool {
        self.veil.as_ref().is_some_and(ScreenReaderVeil::is_applied)
    }

    /// The shared dialog container, once created.
    pub fn container(&self) -> Option<NodeId> {
        self.container
    }

    /// Button nodes of an open dialog, in tab order: confirm, reject, close.
    pub fn buttons_of(&self, id: &DialogId) -> Option<[NodeId; 3]> {
        self.stack.get(id).and_then(|d| d.dom()).map(|dom| dom.buttons())
    }
}
