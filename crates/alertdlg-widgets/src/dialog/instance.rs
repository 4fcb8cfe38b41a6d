#![forbid(unsafe_code)]

//! A single alert-dialog instance.
//!
//! Instances are inert until handed to [`DialogManager::open`]; the manager
//! takes ownership, so an open dialog cannot be opened a second time. A
//! runtime [`DialogError::AlreadyOpen`] guard backs up the ownership rule.
//!
//! [`DialogManager::open`]: super::DialogManager::open

use alertdlg_core::page::{NodeId, Page};
use alertdlg_core::uid::session_uid;
use std::fmt;

use super::content::{DialogContent, DialogDom, build_fragment};
use super::trap::FocusTrap;
use super::{DialogError, DialogId, DialogOutcome};

/// Completion callback, invoked at most once at close time.
pub type DialogCallback = Box<dyn FnOnce()>;

/// One modal alert dialog: content, fragment, focus-trap state, and
/// single-shot completion callbacks.
pub struct AlertDialog {
    id: DialogId,
    content: DialogContent,
    dom: Option<DialogDom>,
    trap: FocusTrap,
    is_open: bool,
    confirm_callback: Option<DialogCallback>,
    reject_callback: Option<DialogCallback>,
    cached_focus_target: Option<NodeId>,
}

impl AlertDialog {
    /// Fixed size of the focus cycle: confirm, reject, close.
    pub const BUTTON_COUNT: usize = 3;

    /// Create an inert dialog from its display parameters.
    ///
    /// The id is generated here and is collision-resistant across the
    /// session (monotonic time plus randomness).
    pub fn new(content: DialogContent) -> Self {
        Self {
            id: DialogId::new(session_uid("alert-dialog")),
            content,
            dom: None,
            trap: FocusTrap::new(Self::BUTTON_COUNT),
            is_open: false,
            confirm_callback: None,
            reject_callback: None,
            cached_focus_target: None,
        }
    }

    /// Attach the confirm callback.
    pub fn on_confirm(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.confirm_callback = Some(Box::new(callback));
        self
    }

    /// Attach the reject callback.
    pub fn on_reject(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.reject_callback = Some(Box::new(callback));
        self
    }

    /// This dialog's session-unique id.
    pub fn id(&self) -> &DialogId {
        &self.id
    }

    /// Whether the fragment is currently materialized in the page.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Materialize the fragment under `container` and record the element to
    /// restore focus to on close.
    pub(crate) fn open_into(
        &mut self,
        page: &mut Page,
        container: NodeId,
    ) -> Result<(), DialogError> {
        if self.is_open {
            return Err(DialogError::AlreadyOpen);
        }
        self.cached_focus_target = Some(page.active_element());
        self.dom = Some(build_fragment(page, container, self.id.as_str(), &self.content));
        self.trap = FocusTrap::new(Self::BUTTON_COUNT);
        self.is_open = true;
        Ok(())
    }

    /// Tear the fragment out of the page. No-op when already closed.
    pub(crate) fn close_dom(&mut self, page: &mut Page) {
        if let Some(dom) = self.dom.take() {
            page.remove(dom.dialog);
        }
        self.is_open = false;
    }

    /// Node handles of the materialized fragment.
    pub(crate) fn dom(&self) -> Option<&DialogDom> {
        self.dom.as_ref()
    }

    /// Keyboard state machine of this dialog.
    pub(crate) fn trap(&self) -> &FocusTrap {
        &self.trap
    }

    pub(crate) fn trap_mut(&mut self) -> &mut FocusTrap {
        &mut self.trap
    }

    /// Element that held focus immediately before this dialog opened.
    pub(crate) fn cached_focus_target(&self) -> Option<NodeId> {
        self.cached_focus_target
    }

    /// Take the callback selected by the close path, if any. `Dismissed`
    /// never yields a callback; taking is what makes invocation single-shot.
    pub(crate) fn take_callback(&mut self, outcome: DialogOutcome) -> Option<DialogCallback> {
        match outcome {
            DialogOutcome::Confirmed => self.confirm_callback.take(),
            DialogOutcome::Rejected => self.reject_callback.take(),
            DialogOutcome::Dismissed => None,
        }
    }
}

impl fmt::Debug for AlertDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertDialog")
            .field("id", &self.id)
            .field("is_open", &self.is_open)
            .field("active_button", &self.trap.active_index())
            .field("has_confirm_callback", &self.confirm_callback.is_some())
            .field("has_reject_callback", &self.reject_callback.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_container() -> (Page, NodeId) {
        let mut page = Page::new();
        let container = page.create_element("div");
        page.append_child(page.body(), container);
        (page, container)
    }

    #[test]
    fn new_dialog_is_inert() {
        let dialog = AlertDialog::new(DialogContent::new());
        assert!(!dialog.is_open());
        assert!(dialog.dom().is_none());
        assert!(dialog.id().as_str().starts_with("alert-dialog-"));
    }

    #[test]
    fn ids_are_unique_per_instance() {
        let a = AlertDialog::new(DialogContent::new());
        let b = AlertDialog::new(DialogContent::new());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn open_materializes_and_caches_focus() {
        let (mut page, container) = page_with_container();
        let trigger = page.create_element("button");
        page.append_child(page.body(), trigger);
        page.focus(trigger);

        let mut dialog = AlertDialog::new(DialogContent::new());
        dialog.open_into(&mut page, container).unwrap();

        assert!(dialog.is_open());
        assert_eq!(dialog.cached_focus_target(), Some(trigger));
        let dom = dialog.dom().unwrap();
        assert!(page.is_connected(dom.dialog));
        assert_eq!(page.attr(dom.dialog, "id"), Some(dialog.id().as_str()));
    }

    #[test]
    fn double_open_fails_fast() {
        let (mut page, container) = page_with_container();
        let mut dialog = AlertDialog::new(DialogContent::new());
        dialog.open_into(&mut page, container).unwrap();
        assert_eq!(
            dialog.open_into(&mut page, container),
            Err(DialogError::AlreadyOpen)
        );
    }

    #[test]
    fn close_removes_fragment_and_is_idempotent() {
        let (mut page, container) = page_with_container();
        let mut dialog = AlertDialog::new(DialogContent::new());
        dialog.open_into(&mut page, container).unwrap();
        let root = dialog.dom().unwrap().dialog;

        dialog.close_dom(&mut page);
        assert!(!dialog.is_open());
        assert!(!page.contains(root));

        // Second close is a no-op.
        dialog.close_dom(&mut page);
        assert!(!dialog.is_open());
    }

    #[test]
    fn callbacks_are_single_shot() {
        let mut dialog = AlertDialog::new(DialogContent::new())
            .on_confirm(|| {})
            .on_reject(|| {});
        assert!(dialog.take_callback(DialogOutcome::Dismissed).is_none());
        assert!(dialog.take_callback(DialogOutcome::Confirmed).is_some());
        assert!(dialog.take_callback(DialogOutcome::Confirmed).is_none());
        assert!(dialog.take_callback(DialogOutcome::Rejected).is_some());
        assert!(dialog.take_callback(DialogOutcome::Rejected).is_none());
    }
}
