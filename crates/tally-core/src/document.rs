//! Headless document: an arena of elements that implements [`Mount`].
//!
//! Used wherever there is no browser: unit tests, the test harness and
//! static rendering. Tree mutations follow DOM rules so widgets behave the
//! same here as in a real page.

use crate::error::MountError;
use crate::event::Event;
use crate::mount::{Mount, Tag};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Index of a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    tag: Tag,
    text: String,
    attributes: Vec<(String, String)>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    const fn new(tag: Tag) -> Self {
        Self {
            tag,
            text: String::new(),
            attributes: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// In-memory element tree with a single `div` root.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding only its root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new(Tag::Div)],
        }
    }

    /// The root node. It can receive children but never be moved.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes ever created, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A document always holds its root.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    fn node(&self, id: NodeId) -> Result<&NodeData, MountError> {
        self.nodes.get(id.0).ok_or(MountError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData, MountError> {
        self.nodes.get_mut(id.0).ok_or(MountError::UnknownNode(id))
    }

    /// Element kind of a node.
    pub fn tag(&self, id: NodeId) -> Result<Tag, MountError> {
        Ok(self.node(id)?.tag)
    }

    /// The node's own text, excluding descendants.
    pub fn text(&self, id: NodeId) -> Result<&str, MountError> {
        Ok(&self.node(id)?.text)
    }

    /// Attribute value, if set.
    pub fn attribute(&self, id: NodeId, name: &str) -> Result<Option<&str>, MountError> {
        Ok(self
            .node(id)?
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str()))
    }

    /// Children in document order.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId], MountError> {
        Ok(&self.node(id)?.children)
    }

    /// Parent node, `None` for the root and for detached nodes.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, MountError> {
        Ok(self.node(id)?.parent)
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> Result<bool, MountError> {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return Ok(true);
            }
            current = self.node(id)?.parent;
        }
        Ok(false)
    }

    /// `id` and its descendants in pre-order.
    pub fn descendants(&self, id: NodeId) -> Result<Vec<NodeId>, MountError> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let node = self.node(next)?;
            out.push(next);
            stack.extend(node.children.iter().rev().copied());
        }
        Ok(out)
    }

    /// Attached nodes with the given tag, in document order.
    #[must_use]
    pub fn find_by_tag(&self, tag: Tag) -> Vec<NodeId> {
        self.descendants(self.root())
            .unwrap_or_default()
            .into_iter()
            .filter(|id| self.nodes[id.0].tag == tag)
            .collect()
    }

    /// Attached nodes whose own text equals `text`, in document order.
    #[must_use]
    pub fn find_by_text(&self, text: &str) -> Vec<NodeId> {
        self.descendants(self.root())
            .unwrap_or_default()
            .into_iter()
            .filter(|id| self.nodes[id.0].text == text)
            .collect()
    }

    /// Concatenated text of `id` and its descendants.
    pub fn text_content(&self, id: NodeId) -> Result<String, MountError> {
        let mut out = String::new();
        for node in self.descendants(id)? {
            out.push_str(&self.nodes[node.0].text);
        }
        Ok(out)
    }

    /// Build a click event aimed at `id`.
    pub fn click(&self, id: NodeId) -> Result<Event<NodeId>, MountError> {
        self.node(id)?;
        Ok(Event::click(id))
    }

    /// Serialize a subtree to HTML.
    pub fn to_html(&self, id: NodeId) -> Result<String, MountError> {
        let mut out = String::new();
        self.write_html(id, &mut out)?;
        Ok(out)
    }

    fn write_html(&self, id: NodeId, out: &mut String) -> Result<(), MountError> {
        let node = self.node(id)?;
        out.push('<');
        out.push_str(node.tag.name());
        for (name, value) in &node.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(value, out);
            out.push('"');
        }
        out.push('>');
        escape_into(&node.text, out);
        for child in &node.children {
            self.write_html(*child, out)?;
        }
        out.push_str("</");
        out.push_str(node.tag.name());
        out.push('>');
        Ok(())
    }

    fn detach(&mut self, id: NodeId) -> Result<(), MountError> {
        if let Some(parent) = self.node_mut(id)?.parent.take() {
            self.node_mut(parent)?.children.retain(|child| *child != id);
        }
        Ok(())
    }
}

/// Escape text for use in HTML content or a double-quoted attribute.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, &mut out);
    out
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

impl Mount for Document {
    type Node = NodeId;

    fn create_element(&mut self, tag: Tag) -> Result<NodeId, MountError> {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData::new(tag));
        trace!(%id, %tag, "create element");
        Ok(id)
    }

    /// Replaces the text and drops existing children, like `innerText`.
    fn set_text(&mut self, node: &NodeId, text: &str) -> Result<(), MountError> {
        let children = std::mem::take(&mut self.node_mut(*node)?.children);
        for child in children {
            self.node_mut(child)?.parent = None;
        }
        text.clone_into(&mut self.node_mut(*node)?.text);
        Ok(())
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<(), MountError> {
        let attributes = &mut self.node_mut(*node)?.attributes;
        match attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => value.clone_into(existing),
            None => attributes.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), MountError> {
        let (parent, child) = (*parent, *child);
        self.node(parent)?;
        self.node(child)?;
        if child == self.root() || self.is_inclusive_ancestor(child, parent)? {
            return Err(MountError::Hierarchy { parent, child });
        }
        self.detach(child)?;
        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        trace!(%parent, %child, "append child");
        Ok(())
    }
}
