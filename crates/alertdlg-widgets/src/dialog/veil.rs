#![forbid(unsafe_code)]

//! Screen-reader veil: hides the non-dialog page from assistive technology
//! while any dialog is open.
//!
//! The root-region set is collected once — the direct children of the body,
//! excluding script elements and the dialog container — and reused for the
//! rest of the page session. Regions added to the body afterwards are not
//! picked up (see DESIGN.md for why the snapshot is not recomputed).

use alertdlg_core::page::{NodeId, Page};

/// Assistive-technology visibility toggle for the page's root regions.
#[derive(Debug)]
pub struct ScreenReaderVeil {
    roots: Vec<NodeId>,
    applied: bool,
}

impl ScreenReaderVeil {
    /// Snapshot the root-region set from the body's current direct children.
    pub fn collect(page: &Page, container: NodeId) -> Self {
        let roots = page
            .children(page.body())
            .iter()
            .copied()
            .filter(|&child| child != container && page.tag(child) != Some("script"))
            .collect();
        Self {
            roots,
            applied: false,
        }
    }

    /// Hide every root region from assistive technology.
    pub fn apply(&mut self, page: &mut Page) {
        for &root in &self.roots {
            page.set_attr(root, "aria-hidden", "true");
            page.set_attr(root, "tabindex", "0");
        }
        self.applied = true;
    }

    /// Restore every root region to its unhidden state.
    pub fn lift(&mut self, page: &mut Page) {
        for &root in &self.roots {
            page.remove_attr(root, "aria-hidden");
            page.remove_attr(root, "tabindex");
        }
        self.applied = false;
    }

    /// Whether the veil is currently applied.
    #[inline]
    pub fn is_applied(&self) -> bool {
        self.applied
    }

    /// The snapshot of root regions this veil toggles.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_regions() -> (Page, NodeId, Vec<NodeId>) {
        let mut page = Page::new();
        let header = page.create_element("header");
        let main = page.create_element("main");
        let script = page.create_element("script");
        let container = page.create_element("div");
        for node in [header, main, script, container] {
            page.append_child(page.body(), node);
        }
        (page, container, vec![header, main])
    }

    #[test]
    fn collect_skips_scripts_and_container() {
        let (page, container, regions) = page_with_regions();
        let veil = ScreenReaderVeil::collect(&page, container);
        assert_eq!(veil.roots(), regions.as_slice());
        assert!(!veil.is_applied());
    }

    #[test]
    fn apply_hides_all_roots() {
        let (mut page, container, regions) = page_with_regions();
        let mut veil = ScreenReaderVeil::collect(&page, container);
        veil.apply(&mut page);
        assert!(veil.is_applied());
        for region in regions {
            assert_eq!(page.attr(region, "aria-hidden"), Some("true"));
            assert_eq!(page.attr(region, "tabindex"), Some("0"));
        }
    }

    #[test]
    fn lift_restores_unhidden_state() {
        let (mut page, container, regions) = page_with_regions();
        let mut veil = ScreenReaderVeil::collect(&page, container);
        veil.apply(&mut page);
        veil.lift(&mut page);
        assert!(!veil.is_applied());
        for region in regions {
            assert!(!page.has_attr(region, "aria-hidden"));
            assert!(!page.has_attr(region, "tabindex"));
        }
    }

    #[test]
    fn snapshot_ignores_later_regions() {
        let (mut page, container, _) = page_with_regions();
        let mut veil = ScreenReaderVeil::collect(&page, container);

        let late = page.create_element("aside");
        page.append_child(page.body(), late);

        veil.apply(&mut page);
        assert!(!page.has_attr(late, "aria-hidden"));
    }

    #[test]
    fn apply_survives_removed_roots() {
        let (mut page, container, regions) = page_with_regions();
        let mut veil = ScreenReaderVeil::collect(&page, container);
        page.remove(regions[0]);
        veil.apply(&mut page);
        assert_eq!(page.attr(regions[1], "aria-hidden"), Some("true"));
    }
}
