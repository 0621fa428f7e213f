//! Method-style access to a borrowed node.

use std::fmt;
use std::ptr;

use crate::node::{Node, NodeType};
use crate::selector::{self, Selector};
use crate::{traverse, utilities};

/// A borrowed handle to a node in a tree.
///
/// Handles are cheap to copy and compare by identity: two handles are equal
/// when they point at the same node, not when the nodes look alike.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    node: &'a Node,
}

fn wrap_all(nodes: Vec<&Node>) -> Vec<NodeRef<'_>> {
    nodes.into_iter().map(NodeRef::new).collect()
}

impl<'a> NodeRef<'a> {
    pub fn new(node: &'a Node) -> Self {
        Self { node }
    }

    /// The underlying node
    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// Delegate to Node methods
    pub fn node_type(&self) -> NodeType {
        self.node.node_type()
    }

    pub fn is_element(&self) -> bool {
        self.node.is_element()
    }

    pub fn is_text(&self) -> bool {
        self.node.is_text()
    }

    pub fn tag_name(&self) -> Option<&'a str> {
        self.node.tag_name()
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> {
        self.node.children().iter().map(NodeRef::new)
    }

    pub fn element_children(&self) -> impl Iterator<Item = NodeRef<'a>> {
        self.node.element_children().map(NodeRef::new)
    }

    /// Returns the attribute value or an empty string if the attribute isn't found.
    pub fn attr(&self, key: &str) -> &'a str {
        utilities::attr(self.node, key)
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        utilities::has_class(self.node, class_name)
    }

    /// Trimmed text of this text node or of its first text child
    pub fn text_content(&self) -> &'a str {
        utilities::text_content(self.node)
    }

    pub fn first_with_id(&self, id: &str) -> Option<NodeRef<'a>> {
        traverse::first_with_id(self.node, id).map(NodeRef::new)
    }

    pub fn first_with_id_r(&self, id: &str) -> Option<NodeRef<'a>> {
        traverse::first_with_id_r(self.node, id).map(NodeRef::new)
    }

    pub fn first_with_class_name(&self, class_name: &str) -> Option<NodeRef<'a>> {
        traverse::first_with_class_name(self.node, class_name).map(NodeRef::new)
    }

    pub fn first_with_class_name_r(&self, class_name: &str) -> Option<NodeRef<'a>> {
        traverse::first_with_class_name_r(self.node, class_name).map(NodeRef::new)
    }

    /// This node, if it has the class. See [`all_with_class_name`](crate::all_with_class_name).
    pub fn all_with_class_name(&self, class_name: &str) -> Vec<NodeRef<'a>> {
        wrap_all(traverse::all_with_class_name(self.node, class_name))
    }

    pub fn all_with_class_name_r(&self, class_name: &str) -> Vec<NodeRef<'a>> {
        wrap_all(traverse::all_with_class_name_r(self.node, class_name))
    }

    pub fn first_with_tag(&self, tag_name: &str) -> Option<NodeRef<'a>> {
        traverse::first_with_tag(self.node, tag_name).map(NodeRef::new)
    }

    pub fn first_with_tag_r(&self, tag_name: &str) -> Option<NodeRef<'a>> {
        traverse::first_with_tag_r(self.node, tag_name).map(NodeRef::new)
    }

    pub fn all_with_tag(&self, tag_name: &str) -> Vec<NodeRef<'a>> {
        wrap_all(traverse::all_with_tag(self.node, tag_name))
    }

    pub fn all_with_tag_r(&self, tag_name: &str) -> Vec<NodeRef<'a>> {
        wrap_all(traverse::all_with_tag_r(self.node, tag_name))
    }

    pub fn select_all(&self, selector: &Selector) -> Vec<NodeRef<'a>> {
        wrap_all(selector::select_all(self.node, selector))
    }

    pub fn select_first(&self, selector: &Selector) -> Option<NodeRef<'a>> {
        selector::select_first(self.node, selector).map(NodeRef::new)
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        Self::new(node)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.node, other.node)
    }
}

impl Eq for NodeRef<'_> {}

/// Formats as the node's raw data: the tag name of an element, the text of a
/// text node.
impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.node.data())
    }
}
