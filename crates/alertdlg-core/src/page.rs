#![forbid(unsafe_code)]

//! Retained element tree standing in for the host document.
//!
//! The dialog widgets never touch a real DOM; they manipulate a [`Page`],
//! which models the three things the subsystem needs from a document: a tree
//! of elements rooted at a body, string attributes per element (the ARIA
//! contract lives here as explicit, testable data), and a single focused
//! element.
//!
//! # Invariants
//!
//! - `focused` always names a live node; it falls back to the body when the
//!   focused subtree is removed, mirroring host behavior.
//! - Node ids are never reused within a page session, so a stale id held
//!   across a removal can be detected (`contains` returns false) instead of
//!   silently aliasing a new element.
//!
//! # Failure modes
//!
//! - Operations on dead or unknown ids are no-ops (mutations) or `None`
//!   (queries); nothing panics.

use ahash::AHashMap;

/// Identifies an element within a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Raw index value, mainly useful for logging.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

#[derive(Debug)]
struct Node {
    tag: String,
    attrs: AHashMap<String, String>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    alive: bool,
}

impl Node {
    fn new(tag: String) -> Self {
        Self {
            tag,
            attrs: AHashMap::new(),
            text: None,
            parent: None,
            children: Vec::new(),
            alive: true,
        }
    }
}

/// The host page: element tree, attributes, and focus.
#[derive(Debug)]
pub struct Page {
    nodes: Vec<Node>,
    body: NodeId,
    focused: NodeId,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// Create a page containing only a body element, which holds focus.
    pub fn new() -> Self {
        let body = NodeId(0);
        Self {
            nodes: vec![Node::new("body".to_owned())],
            body,
            focused: body,
        }
    }

    /// The body element.
    #[inline]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create a detached element with the given tag.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(tag.into()));
        id
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize).filter(|n| n.alive)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize).filter(|n| n.alive)
    }

    /// Whether the id names a live node (attached or detached).
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Whether the node is live and reachable from the body.
    pub fn is_connected(&self, id: NodeId) -> bool {
        if self.node(id).is_none() {
            return false;
        }
        let mut current = id;
        loop {
            if current == self.body {
                return true;
            }
            match self.node(current).and_then(|n| n.parent) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Tag name of a live node.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.tag.as_str())
    }

    /// Parent of a live node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Children of a live node, in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent. Returns false (and does nothing) if either node is
    /// dead or the move would create a cycle.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child || self.node(parent).is_none() || self.node(child).is_none() {
            return false;
        }
        // Reject appending an ancestor beneath its own descendant.
        let mut cursor = Some(parent);
        while let Some(current) = cursor {
            if current == child {
                return false;
            }
            cursor = self.node(current).and_then(|n| n.parent);
        }

        self.detach(child);
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
        true
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).and_then(|n| n.parent) else {
            return;
        };
        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|&c| c != id);
        }
        if let Some(node) = self.node_mut(id) {
            node.parent = None;
        }
    }

    /// Remove a node and its whole subtree from the page.
    ///
    /// If the focused element was inside the removed subtree, focus falls
    /// back to the body.
    pub fn remove(&mut self, id: NodeId) {
        if self.node(id).is_none() || id == self.body {
            return;
        }
        self.detach(id);

        let mut pending = vec![id];
        let mut focus_lost = false;
        while let Some(current) = pending.pop() {
            if current == self.focused {
                focus_lost = true;
            }
            if let Some(node) = self.node_mut(current) {
                node.alive = false;
                pending.extend(std::mem::take(&mut node.children));
            }
        }
        if focus_lost {
            self.focused = self.body;
        }
    }

    /// Set an attribute on a live node.
    pub fn set_attr(&mut self, id: NodeId, name: impl Into<String>, value: impl Into<String>) {
        if let Some(node) = self.node_mut(id) {
            node.attrs.insert(name.into(), value.into());
        }
    }

    /// Read an attribute.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).and_then(|n| n.attrs.get(name)).map(String::as_str)
    }

    /// Remove an attribute.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let Some(node) = self.node_mut(id) {
            node.attrs.remove(name);
        }
    }

    /// Whether the node carries the attribute.
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    /// Set the text content of a node.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        if let Some(node) = self.node_mut(id) {
            node.text = Some(text.into());
        }
    }

    /// Text content of a node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(|n| n.text.as_deref())
    }

    /// Move focus to a live node. Returns whether focus actually moved there.
    pub fn focus(&mut self, id: NodeId) -> bool {
        if self.node(id).is_some() {
            self.focused = id;
            true
        } else {
            false
        }
    }

    /// The currently focused element (the body when nothing else holds focus).
    #[inline]
    pub fn active_element(&self) -> NodeId {
        self.focused
    }

    /// All live descendants of `root` in depth-first document order.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut pending: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(current) = pending.pop() {
            out.push(current);
            pending.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    /// First descendant of `root` carrying `name="value"`.
    pub fn find_by_attr(&self, root: NodeId, name: &str, value: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|&id| self.attr(id, name) == Some(value))
    }
}
