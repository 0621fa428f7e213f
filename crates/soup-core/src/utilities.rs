//! Attribute, class and text helpers shared by the traversal functions.

use crate::node::Node;

/// Separator between tokens of a `class` attribute. Exactly one space: tabs
/// and newlines are part of a token.
pub const CLASS_SEPARATOR: char = ' ';

/// Characters stripped from both ends of text returned by [`text_content`]
pub const TEXT_TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r'];

/// Returns the value of the first attribute named `key`, or an empty string
/// if the node has no such attribute (or is not an element).
pub fn attr<'a>(node: &'a Node, key: &str) -> &'a str {
    node.as_element().and_then(|e| e.attr(key)).unwrap_or("")
}

/// Returns true if the node's first `class` attribute contains `class_name`
/// as a whole space-separated token.
pub fn has_class(node: &Node, class_name: &str) -> bool {
    node.as_element()
        .and_then(|e| e.attr("class"))
        .is_some_and(|classes| classes.split(CLASS_SEPARATOR).any(|c| c == class_name))
}

/// Returns the trimmed text of a text node, or of the node's first direct
/// text child. Deeper descendants are never consulted.
pub fn text_content(node: &Node) -> &str {
    let text = match node {
        Node::Text(data) => Some(data.as_str()),
        _ => node.children().iter().find_map(|c| match c {
            Node::Text(data) => Some(data.as_str()),
            _ => None,
        }),
    };
    text.map(|t| t.trim_matches(TEXT_TRIM_CHARS)).unwrap_or("")
}
