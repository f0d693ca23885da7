//! The host capability widgets mount into.
//!
//! A widget never owns its host. It receives `&mut impl Mount` for the
//! duration of a call and keeps only the node handles it created.
//!
//! # Examples
//!
//! ```
//! use tally_core::{Document, Mount, Tag};
//!
//! let mut doc = Document::new();
//! let root = doc.root();
//! let button = doc.create_element(Tag::Button).unwrap();
//! doc.set_text(&button, "Click me").unwrap();
//! doc.append_child(&root, &button).unwrap();
//!
//! assert_eq!(doc.to_html(root).unwrap(), "<div><button>Click me</button></div>");
//! ```

use crate::error::MountError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Element kinds a widget can ask its host for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Clickable control
    Button,
    /// Inline text display
    Span,
    /// Block container
    Div,
}

impl Tag {
    /// HTML tag name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Span => "span",
            Self::Div => "div",
        }
    }

    /// Look up a tag by its HTML name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "button" => Some(Self::Button),
            "span" => Some(Self::Span),
            "div" => Some(Self::Div),
            _ => None,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A host that can build and mutate a tree of visual elements.
pub trait Mount {
    /// Opaque handle to one element of this host.
    type Node: Clone + PartialEq + fmt::Debug;

    /// Create a detached element.
    fn create_element(&mut self, tag: Tag) -> Result<Self::Node, MountError>;

    /// Replace the element's text content.
    fn set_text(&mut self, node: &Self::Node, text: &str) -> Result<(), MountError>;

    /// Set an attribute on the element.
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str)
        -> Result<(), MountError>;

    /// Append `child` as the last child of `parent`, moving it if attached elsewhere.
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), MountError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        assert_eq!(Tag::Button.name(), "button");
        assert_eq!(Tag::Span.name(), "span");
        assert_eq!(Tag::Div.name(), "div");
    }

    #[test]
    fn test_tag_from_name() {
        assert_eq!(Tag::from_name("button"), Some(Tag::Button));
        assert_eq!(Tag::from_name("span"), Some(Tag::Span));
        assert_eq!(Tag::from_name("div"), Some(Tag::Div));
        assert_eq!(Tag::from_name("Button"), None);
        assert_eq!(Tag::from_name("table"), None);
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(Tag::Span.to_string(), "span");
    }

    #[test]
    fn test_tag_serde_lowercase() {
        let json = serde_json::to_string(&Tag::Button).unwrap();
        assert_eq!(json, "\"button\"");
        let tag: Tag = serde_json::from_str("\"div\"").unwrap();
        assert_eq!(tag, Tag::Div);
    }
}
