//! Owned HTML node tree.
//!
//! Any parser (html5ever, a hand-built fixture, ...) can produce this structure;
//! the selection functions only ever borrow it.

use std::mem;

use smallvec::SmallVec;

/// Attribute storage. Most elements carry one or two attributes.
pub type Attributes = SmallVec<[Attribute; 2]>;

/// Kind discriminant of a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// Document root (also used for parsed fragments)
    Document,
    /// Element node
    Element,
    /// Text node
    Text,
    /// Comment node
    Comment,
    /// Doctype declaration
    Doctype,
}

/// A single `key="value"` pair, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Element data: tag name, ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name as produced by the parser (lowercase for HTML)
    pub tag: String,

    /// Attributes in source order. Keys may repeat; lookups take the first.
    pub attributes: Attributes,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: SmallVec::new(),
            children: Vec::new(),
        }
    }

    /// Get the value of the first attribute named `key`
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

/// A node of a parsed document.
///
/// The tree owns all of its nodes. Children are kept in document order, which
/// is all the selection functions need: there are no parent or sibling links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Document(Vec<Node>),
    Element(Element),
    Text(String),
    Comment(String),
    Doctype(String),
}

impl Node {
    /// Create an empty document node
    pub fn document() -> Self {
        Node::Document(Vec::new())
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element::new(tag_name))
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut element = Element::new(tag_name);
        element.attributes = attrs
            .into_iter()
            .map(|(k, v)| Attribute::new(k, v))
            .collect();
        Node::Element(element)
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Node::Comment(content.to_string())
    }

    /// Create a new doctype node
    pub fn doctype(name: &str) -> Self {
        Node::Doctype(name.to_string())
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Document(_) => NodeType::Document,
            Node::Element(_) => NodeType::Element,
            Node::Text(_) => NodeType::Text,
            Node::Comment(_) => NodeType::Comment,
            Node::Doctype(_) => NodeType::Doctype,
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Get the tag name of an element node
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|e| e.tag.as_str())
    }

    /// Attributes of an element node, empty for every other kind
    pub fn attributes(&self) -> &[Attribute] {
        match self {
            Node::Element(element) => element.attributes.as_slice(),
            _ => &[],
        }
    }

    /// Raw node data: the tag for elements, the character data for text,
    /// comments and doctypes, empty for documents.
    pub fn data(&self) -> &str {
        match self {
            Node::Document(_) => "",
            Node::Element(element) => element.tag.as_str(),
            Node::Text(data) | Node::Comment(data) | Node::Doctype(data) => data.as_str(),
        }
    }

    /// Get all child nodes
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document(children) => children.as_slice(),
            Node::Element(element) => element.children.as_slice(),
            _ => &[],
        }
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().iter().filter(|n| n.is_element())
    }

    /// Add a child node.
    ///
    /// Only documents and elements hold children; a child pushed onto any
    /// other kind is dropped.
    pub fn add_child(&mut self, child: Node) {
        match self {
            Node::Document(children) => children.push(child),
            Node::Element(element) => element.children.push(child),
            other => {
                tracing::warn!(
                    node_type = ?other.node_type(),
                    "dropping child added to a leaf node"
                );
            }
        }
    }

    /// Builder form of [`Node::add_child`]
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    fn take_children(&mut self) -> Vec<Node> {
        match self {
            Node::Document(children) => mem::take(children),
            Node::Element(element) => mem::take(&mut element.children),
            _ => Vec::new(),
        }
    }
}

/// Frees descendants from a flat work list, so dropping a deeply nested
/// tree never recurses.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = self.take_children();
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.take_children());
        }
    }
}
