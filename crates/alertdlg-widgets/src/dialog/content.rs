#![forbid(unsafe_code)]

//! Dialog content parameters and structured fragment construction.
//!
//! Instead of interpolating an HTML string, the fragment is built node by
//! node against the page tree, so the ARIA contract is explicit data rather
//! than incidental string content:
//!
//! - `role="alertdialog"`, `aria-modal="true"`, `tabindex="0"` on the dialog;
//! - `aria-labelledby` / `aria-describedby` wired to the title and body;
//! - an `aria-hidden` warning icon;
//! - a close button with a descriptive `aria-label`.
//!
//! Every parameter is optional and falls back to a documented default; a
//! rich-markup variant takes precedence over its plain-text counterpart when
//! both are supplied.

use alertdlg_core::page::{NodeId, Page};

/// Default dialog title.
pub const DEFAULT_TITLE: &str = "Warning";
/// Default warning body text.
pub const DEFAULT_WARNING_TEXT: &str = "This is a generic warning message.";
/// Default question text.
pub const DEFAULT_QUESTION_TEXT: &str = "Would you like to continue?";
/// Default confirm button label.
pub const DEFAULT_CONFIRM_LABEL: &str = "Yes";
/// Default reject button label.
pub const DEFAULT_REJECT_LABEL: &str = "No";
/// Accessible label of the close (×) button.
pub const CLOSE_BUTTON_LABEL: &str = "Close the dialog and ignore the warning";

/// Display parameters of a dialog. All fields optional; see the `DEFAULT_*`
/// constants for the fallbacks.
#[derive(Debug, Clone, Default)]
pub struct DialogContent {
    title: Option<String>,
    warning_text: Option<String>,
    warning_markup: Option<String>,
    question_text: Option<String>,
    question_markup: Option<String>,
    confirm_label: Option<String>,
    reject_label: Option<String>,
}

impl DialogContent {
    /// Start with every field defaulted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dialog title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the warning body as plain text.
    pub fn warning_text(mut self, text: impl Into<String>) -> Self {
        self.warning_text = Some(text.into());
        self
    }

    /// Set the warning body as a rich-markup fragment. Takes precedence over
    /// [`warning_text`](Self::warning_text).
    pub fn warning_markup(mut self, markup: impl Into<String>) -> Self {
        self.warning_markup = Some(markup.into());
        self
    }

    /// Set the question as plain text.
    pub fn question_text(mut self, text: impl Into<String>) -> Self {
        self.question_text = Some(text.into());
        self
    }

    /// Set the question as a rich-markup fragment. Takes precedence over
    /// [`question_text`](Self::question_text).
    pub fn question_markup(mut self, markup: impl Into<String>) -> Self {
        self.question_markup = Some(markup.into());
        self
    }

    /// Set the confirm button label.
    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    /// Set the reject button label.
    pub fn reject_label(mut self, label: impl Into<String>) -> Self {
        self.reject_label = Some(label.into());
        self
    }

    pub(crate) fn resolved_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub(crate) fn resolved_confirm_label(&self) -> &str {
        self.confirm_label.as_deref().unwrap_or(DEFAULT_CONFIRM_LABEL)
    }

    pub(crate) fn resolved_reject_label(&self) -> &str {
        self.reject_label.as_deref().unwrap_or(DEFAULT_REJECT_LABEL)
    }

    fn warning_body(&self) -> Body<'_> {
        match (&self.warning_markup, &self.warning_text) {
            (Some(markup), _) => Body::Markup(markup),
            (None, Some(text)) => Body::Text(text),
            (None, None) => Body::Text(DEFAULT_WARNING_TEXT),
        }
    }

    fn question_body(&self) -> Body<'_> {
        match (&self.question_markup, &self.question_text) {
            (Some(markup), _) => Body::Markup(markup),
            (None, Some(text)) => Body::Text(text),
            (None, None) => Body::Text(DEFAULT_QUESTION_TEXT),
        }
    }
}

enum Body<'a> {
    Text(&'a str),
    Markup(&'a str),
}

impl Body<'_> {
    /// Materialize the body inside `parent`: plain text becomes a paragraph
    /// element, markup becomes an opaque fragment node carrying the raw
    /// string for the host renderer.
    fn build(&self, page: &mut Page, parent: NodeId) {
        let node = match self {
            Self::Text(text) => {
                let p = page.create_element("p");
                page.set_text(p, *text);
                p
            }
            Self::Markup(markup) => {
                let fragment = page.create_element("fragment");
                page.set_text(fragment, *markup);
                fragment
            }
        };
        page.append_child(parent, node);
    }
}

/// Node handles into a materialized dialog fragment.
///
/// Captured at build time so no lookup can fail later; every close path and
/// focus move goes through these ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogDom {
    /// The `role="alertdialog"` element.
    pub dialog: NodeId,
    /// Title element referenced by `aria-labelledby`.
    pub title: NodeId,
    /// Body wrapper referenced by `aria-describedby`.
    pub description: NodeId,
    /// Confirm button.
    pub confirm_button: NodeId,
    /// Reject button.
    pub reject_button: NodeId,
    /// Close (×) button.
    pub close_button: NodeId,
}

impl DialogDom {
    /// The focus cycle of the trap: confirm, reject, close, in fixed order.
    pub fn buttons(&self) -> [NodeId; 3] {
        [self.confirm_button, self.reject_button, self.close_button]
    }
}

/// Build the dialog fragment under `container` and return its node handles.
pub(crate) fn build_fragment(
    page: &mut Page,
    container: NodeId,
    id: &str,
    content: &DialogContent,
) -> DialogDom {
    let label_id = format!("{id}-label");
    let description_id = format!("{id}-description");

    let dialog = page.create_element("div");
    page.set_attr(dialog, "class", "alert-dialog");
    page.set_attr(dialog, "id", id);
    page.set_attr(dialog, "role", "alertdialog");
    page.set_attr(dialog, "aria-modal", "true");
    page.set_attr(dialog, "aria-labelledby", label_id.as_str());
    page.set_attr(dialog, "aria-describedby", description_id.as_str());
    page.set_attr(dialog, "tabindex", "0");
    page.append_child(container, dialog);

    let dialog_box = page.create_element("div");
    page.set_attr(dialog_box, "class", "alert-dialog__box");
    page.append_child(dialog, dialog_box);

    // Header: title + close button.
    let header = page.create_element("div");
    page.set_attr(header, "class", "alert-dialog__header");
    page.append_child(dialog_box, header);

    let title_wrap = page.create_element("span");
    page.set_attr(title_wrap, "class", "alert-dialog__title");
    page.append_child(header, title_wrap);

    let title = page.create_element("h2");
    page.set_attr(title, "class", "alert-dialog__title-text");
    page.set_attr(title, "id", label_id);
    page.set_text(title, content.resolved_title());
    page.append_child(title_wrap, title);

    let close_button = page.create_element("button");
    page.set_attr(close_button, "class", "alert-dialog__close-button");
    page.set_attr(close_button, "aria-label", CLOSE_BUTTON_LABEL);
    page.set_attr(close_button, "type", "button");
    page.append_child(header, close_button);

    // Body: warning block, question, action buttons.
    let body = page.create_element("div");
    page.set_attr(body, "class", "alert-dialog__body");
    page.append_child(dialog_box, body);

    let description = page.create_element("div");
    page.set_attr(description, "id", description_id);
    page.append_child(body, description);

    let warning = page.create_element("div");
    page.set_attr(warning, "class", "warning-text");
    page.append_child(description, warning);

    let icon = page.create_element("span");
    page.set_attr(icon, "class", "warning-text__icon");
    page.set_attr(icon, "aria-hidden", "true");
    page.set_text(icon, "!");
    page.append_child(warning, icon);

    let warning_body = page.create_element("div");
    page.set_attr(warning_body, "class", "warning-text__text");
    page.append_child(warning, warning_body);
    content.warning_body().build(page, warning_body);

    let question = page.create_element("div");
    page.append_child(description, question);
    content.question_body().build(page, question);

    let buttons = page.create_element("div");
    page.set_attr(buttons, "class", "alert-dialog__buttons");
    page.append_child(description, buttons);

    let confirm_button = page.create_element("button");
    page.set_attr(confirm_button, "class", "alert-dialog__confirm-button");
    page.set_attr(confirm_button, "type", "button");
    page.set_text(confirm_button, content.resolved_confirm_label());
    page.append_child(buttons, confirm_button);

    let reject_button = page.create_element("button");
    page.set_attr(reject_button, "class", "alert-dialog__reject-button");
    page.set_attr(reject_button, "type", "button");
    page.set_text(reject_button, content.resolved_reject_label());
    page.append_child(buttons, reject_button);

    DialogDom {
        dialog,
        title,
        description,
        confirm_button,
        reject_button,
        close_button,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(content: &DialogContent) -> (Page, DialogDom) {
        let mut page = Page::new();
        let container = page.create_element("div");
        page.append_child(page.body(), container);
        let dom = build_fragment(&mut page, container, "alert-dialog-test", content);
        (page, dom)
    }

    #[test]
    fn aria_contract_is_explicit() {
        let (page, dom) = build(&DialogContent::new());
        assert_eq!(page.attr(dom.dialog, "role"), Some("alertdialog"));
        assert_eq!(page.attr(dom.dialog, "aria-modal"), Some("true"));
        assert_eq!(page.attr(dom.dialog, "tabindex"), Some("0"));
        assert_eq!(
            page.attr(dom.dialog, "aria-labelledby"),
            Some("alert-dialog-test-label")
        );
        assert_eq!(
            page.attr(dom.dialog, "aria-describedby"),
            Some("alert-dialog-test-description")
        );
        assert_eq!(page.attr(dom.title, "id"), Some("alert-dialog-test-label"));
        assert_eq!(
            page.attr(dom.description, "id"),
            Some("alert-dialog-test-description")
        );
        assert_eq!(page.attr(dom.close_button, "aria-label"), Some(CLOSE_BUTTON_LABEL));
    }

    #[test]
    fn warning_icon_is_hidden_from_assistive_tech() {
        let (page, dom) = build(&DialogContent::new());
        let icon = page
            .find_by_attr(dom.dialog, "class", "warning-text__icon")
            .expect("icon exists");
        assert_eq!(page.attr(icon, "aria-hidden"), Some("true"));
        assert_eq!(page.text(icon), Some("!"));
    }

    #[test]
    fn omitted_fields_render_defaults() {
        let (page, dom) = build(&DialogContent::new());
        assert_eq!(page.text(dom.title), Some(DEFAULT_TITLE));
        assert_eq!(page.text(dom.confirm_button), Some(DEFAULT_CONFIRM_LABEL));
        assert_eq!(page.text(dom.reject_button), Some(DEFAULT_REJECT_LABEL));

        let warning_body = page
            .find_by_attr(dom.dialog, "class", "warning-text__text")
            .expect("warning body exists");
        let paragraph = page.children(warning_body)[0];
        assert_eq!(page.tag(paragraph), Some("p"));
        assert_eq!(page.text(paragraph), Some(DEFAULT_WARNING_TEXT));
    }

    #[test]
    fn supplied_fields_override_defaults() {
        let content = DialogContent::new()
            .title("Delete item?")
            .warning_text("This cannot be undone.")
            .question_text("Really delete?")
            .confirm_label("Delete")
            .reject_label("Keep");
        let (page, dom) = build(&content);
        assert_eq!(page.text(dom.title), Some("Delete item?"));
        assert_eq!(page.text(dom.confirm_button), Some("Delete"));
        assert_eq!(page.text(dom.reject_button), Some("Keep"));
    }

    #[test]
    fn markup_takes_precedence_over_text() {
        let content = DialogContent::new()
            .warning_text("plain")
            .warning_markup("<p><strong>rich</strong></p>");
        let (page, dom) = build(&content);
        let warning_body = page
            .find_by_attr(dom.dialog, "class", "warning-text__text")
            .expect("warning body exists");
        let fragment = page.children(warning_body)[0];
        assert_eq!(page.tag(fragment), Some("fragment"));
        assert_eq!(page.text(fragment), Some("<p><strong>rich</strong></p>"));
    }

    #[test]
    fn button_cycle_is_confirm_reject_close() {
        let (_, dom) = build(&DialogContent::new());
        assert_eq!(
            dom.buttons(),
            [dom.confirm_button, dom.reject_button, dom.close_button]
        );
    }
}
