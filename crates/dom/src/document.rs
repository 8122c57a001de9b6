//! Arena-backed document tree with computed-style and layout annotations.

use std::collections::HashMap;

use indextree::{Arena, NodeId};
use inspect_geometry::Rect;
use smallvec::SmallVec;

use crate::INSPECTOR_ID_PREFIX;

#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    #[default]
    Document,
    Element {
        tag: String,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DomNode {
    pub kind: NodeKind,
    pub attrs: SmallVec<(String, String), 4>,
    /// Browser-resolved computed declarations, keyed by property name.
    pub declarations: HashMap<String, String>,
    /// Layout rect in page coordinates, captured at snapshot time.
    pub layout_rect: Option<Rect>,
    /// Intrinsic pixel size for replaced elements (images).
    pub natural_size: Option<(f64, f64)>,
}

/// The page document as the inspector sees it.
///
/// Read-only from the core's perspective except for the injected overlay
/// nodes and the cursor affordance.
#[derive(Debug)]
pub struct Document {
    arena: Arena<DomNode>,
    root: NodeId,
    cursor: Option<String>,
    scroll_offset: (f64, f64),
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        Self {
            root: arena.new_node(DomNode::default()),
            arena,
            cursor: None,
            scroll_offset: (0.0, 0.0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Append a new element under `parent` and return its id.
    pub fn create_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let node = self.arena.new_node(DomNode {
            kind: NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
            },
            ..DomNode::default()
        });
        parent.append(node, &mut self.arena);
        node
    }

    /// Append a new text node under `parent` and return its id.
    pub fn create_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let node = self.arena.new_node(DomNode {
            kind: NodeKind::Text {
                text: text.to_owned(),
            },
            ..DomNode::default()
        });
        parent.append(node, &mut self.arena);
        node
    }

    /// Detach `node` and its subtree from the document.
    pub fn remove(&mut self, node: NodeId) {
        node.remove_subtree(&mut self.arena);
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.arena
            .get(node)
            .is_some_and(|entry| !entry.is_removed())
    }

    fn node(&self, node: NodeId) -> Option<&DomNode> {
        self.arena
            .get(node)
            .filter(|entry| !entry.is_removed())
            .map(indextree::Node::get)
    }

    fn node_mut(&mut self, node: NodeId) -> Option<&mut DomNode> {
        self.arena
            .get_mut(node)
            .filter(|entry| !entry.is_removed())
            .map(indextree::Node::get_mut)
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.node(node)?.kind {
            NodeKind::Element { tag } => Some(tag.as_str()),
            NodeKind::Document | NodeKind::Text { .. } => None,
        }
    }

    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        node.children(&self.arena)
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(entry) = self.node_mut(node) {
            if let Some(existing) = entry
                .attrs
                .iter_mut()
                .find(|(attr_name, _)| attr_name == name)
            {
                existing.1 = value.to_owned();
            } else {
                entry.attrs.push((name.to_owned(), value.to_owned()));
            }
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)?
            .attrs
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set one computed declaration on a node. Property names use the CSS
    /// hyphenated form (`padding-top`, not `paddingTop`).
    pub fn set_declaration(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(entry) = self.node_mut(node) {
            entry
                .declarations
                .insert(name.to_owned(), value.to_owned());
        }
    }

    pub fn declaration(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)?
            .declarations
            .get(name)
            .map(String::as_str)
    }

    pub fn declarations(&self, node: NodeId) -> Option<&HashMap<String, String>> {
        self.node(node).map(|entry| &entry.declarations)
    }

    pub fn set_layout_rect(&mut self, node: NodeId, rect: Rect) {
        if let Some(entry) = self.node_mut(node) {
            entry.layout_rect = Some(rect);
        }
    }

    pub fn layout_rect(&self, node: NodeId) -> Option<Rect> {
        self.node(node)?.layout_rect
    }

    pub fn set_natural_size(&mut self, node: NodeId, width: f64, height: f64) {
        if let Some(entry) = self.node_mut(node) {
            entry.natural_size = Some((width, height));
        }
    }

    pub fn natural_size(&self, node: NodeId) -> Option<(f64, f64)> {
        self.node(node)?.natural_size
    }

    /// Replace the node's children with a single text node. Used for the
    /// injected tooltip/label nodes whose content is re-rendered wholesale.
    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        let children: Vec<NodeId> = node.children(&self.arena).collect();
        for child in children {
            child.remove_subtree(&mut self.arena);
        }
        self.create_text(node, text);
    }

    /// Concatenated text of the node's direct text children.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        for child in node.children(&self.arena) {
            if let Some(DomNode {
                kind: NodeKind::Text { text },
                ..
            }) = self.node(child)
            {
                out.push_str(text);
            }
        }
        out
    }

    /// Whether a non-whitespace text node is a *direct* child of the element.
    ///
    /// `<p>hello</p>` qualifies; `<div><span>hello</span></div>` does not,
    /// since the text belongs to the span.
    pub fn has_direct_text(&self, node: NodeId) -> bool {
        node.children(&self.arena).any(|child| {
            matches!(
                self.node(child),
                Some(DomNode {
                    kind: NodeKind::Text { text },
                    ..
                }) if !text.trim().is_empty()
            )
        })
    }

    pub fn id_attribute(&self, node: NodeId) -> Option<&str> {
        self.attribute(node, "id").filter(|value| !value.is_empty())
    }

    /// Class names from the `class` attribute, whitespace-split.
    pub fn class_names(&self, node: NodeId) -> Vec<String> {
        self.attribute(node, "class")
            .map(|value| {
                value
                    .split_ascii_whitespace()
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Derived CSS selector for an element: `#id` when an id is present,
    /// `tag.class1.class2` when classes are present, else the bare tag.
    pub fn derived_selector(&self, node: NodeId) -> Option<String> {
        let tag = self.tag(node)?;
        if let Some(id) = self.id_attribute(node) {
            return Some(format!("#{id}"));
        }
        let classes = self.class_names(node);
        if classes.is_empty() {
            Some(tag.to_owned())
        } else {
            Some(format!("{tag}.{}", classes.join(".")))
        }
    }

    /// Whether the node is one of the inspector's own injected nodes.
    /// Such nodes are excluded from hover and click handling.
    pub fn is_inspector_node(&self, node: NodeId) -> bool {
        self.attribute(node, "id")
            .is_some_and(|id| id.starts_with(INSPECTOR_ID_PREFIX))
    }

    /// Cursor affordance on the page body (`crosshair` while inspecting).
    pub fn set_cursor(&mut self, cursor: Option<&str>) {
        self.cursor = cursor.map(ToOwned::to_owned);
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Viewport scroll position in page coordinates, `(x, y)`.
    pub fn set_scroll_offset(&mut self, x: f64, y: f64) {
        self.scroll_offset = (x, y);
    }

    pub fn scroll_offset(&self) -> (f64, f64) {
        self.scroll_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_text_rule() {
        let mut doc = Document::new();
        let root = doc.root();
        let paragraph = doc.create_element(root, "p");
        let _text = doc.create_text(paragraph, "hello");
        assert!(doc.has_direct_text(paragraph));

        let wrapper = doc.create_element(root, "div");
        let span = doc.create_element(wrapper, "span");
        let _inner = doc.create_text(span, "hello");
        assert!(!doc.has_direct_text(wrapper));
        assert!(doc.has_direct_text(span));
    }

    #[test]
    fn whitespace_only_text_does_not_count() {
        let mut doc = Document::new();
        let root = doc.root();
        let block = doc.create_element(root, "div");
        let _text = doc.create_text(block, "  \n\t ");
        assert!(!doc.has_direct_text(block));
    }

    #[test]
    fn selector_prefers_id_then_classes() {
        let mut doc = Document::new();
        let root = doc.root();

        let with_id = doc.create_element(root, "div");
        doc.set_attribute(with_id, "id", "hero");
        assert_eq!(doc.derived_selector(with_id).as_deref(), Some("#hero"));

        let with_classes = doc.create_element(root, "button");
        doc.set_attribute(with_classes, "class", "btn primary");
        assert_eq!(
            doc.derived_selector(with_classes).as_deref(),
            Some("button.btn.primary")
        );

        let bare = doc.create_element(root, "SECTION");
        assert_eq!(doc.derived_selector(bare).as_deref(), Some("section"));
    }

    #[test]
    fn inspector_nodes_are_filtered() {
        let mut doc = Document::new();
        let root = doc.root();
        let overlay = doc.create_element(root, "div");
        doc.set_attribute(overlay, "id", "pixelscope-overlay");
        assert!(doc.is_inspector_node(overlay));

        let host = doc.create_element(root, "div");
        doc.set_attribute(host, "id", "content");
        assert!(!doc.is_inspector_node(host));
    }

    #[test]
    fn removed_nodes_disappear() {
        let mut doc = Document::new();
        let root = doc.root();
        let node = doc.create_element(root, "div");
        assert!(doc.contains(node));
        doc.remove(node);
        assert!(!doc.contains(node));
        assert!(doc.tag(node).is_none());
    }
}
