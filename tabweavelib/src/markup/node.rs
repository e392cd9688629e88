//! The markup node model.
//!
//! A `Node` is an abstract tree element: tag name, attributes, and content.
//! The presenter composes nodes exclusively through the `Template`
//! collaborator and never manipulates markup text; text serialization
//! (`Node::to_html`) exists for the surrounding application.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute mapping for a markup node. BTreeMap keeps attribute output
/// order deterministic.
pub type AttrMap = BTreeMap<String, String>;

/// One element in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Tag name (e.g. `table`, `tr`, `td`)
    pub tag: String,
    /// Attributes on the opening tag
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: AttrMap,
    /// Element content
    #[serde(default, skip_serializing_if = "Content::is_empty")]
    pub content: Content,
}

/// Content of a markup node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Content {
    /// No content: renders as an empty element
    #[default]
    Empty,
    /// Text content, escaped at serialization time
    Text(String),
    /// Child elements
    Nodes(Vec<Node>),
}

impl Content {
    /// True for the empty/absent content variant
    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }
}

impl Node {
    /// Create a node from its parts
    pub fn new(tag: impl Into<String>, attrs: AttrMap, content: Content) -> Self {
        Node {
            tag: tag.into(),
            attrs,
            content,
        }
    }

    /// The `class` attribute, if present
    pub fn class(&self) -> Option<&str> {
        self.attrs.get("class").map(String::as_str)
    }

    /// Child nodes, empty for text or empty content
    pub fn children(&self) -> &[Node] {
        match &self.content {
            Content::Nodes(nodes) => nodes,
            _ => &[],
        }
    }

    /// Serialize the tree as HTML text with escaped text and attributes.
    ///
    /// This is the surrounding application's concern; the table presenter
    /// itself only builds nodes.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');
        match &self.content {
            Content::Empty => {}
            Content::Text(text) => out.push_str(&escape_text(text)),
            Content::Nodes(nodes) => {
                for node in nodes {
                    node.write_html(out);
                }
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Escape text content for HTML
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape an attribute value for HTML (also escapes double quotes)
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
