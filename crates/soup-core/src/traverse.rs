//! Id, class and tag traversal.
//!
//! Each family has a shallow form (immediate children only) and a recursive
//! form (`_r` suffix) that walks the whole subtree in document order. Results
//! borrow from the tree they were found in.

use crate::node::Node;
use crate::utilities::{attr, has_class};

fn is_tag(node: &Node, tag_name: &str) -> bool {
    node.tag_name() == Some(tag_name)
}

fn has_id(node: &Node, id: &str) -> bool {
    node.is_element() && attr(node, "id") == id
}

fn any_child(_: &Node) -> bool {
    true
}

/// Breadth-first within a frame, depth-first across frames: the children of
/// each visited node are scanned before any of them is descended into. The
/// walk keeps its own stack so tree depth is bounded only by memory.
fn find_first<'a, M>(
    node: &'a Node,
    recursive: bool,
    descend_into: fn(&Node) -> bool,
    is_match: M,
) -> Option<&'a Node>
where
    M: Fn(&Node) -> bool,
{
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if let Some(found) = current.children().iter().find(|&c| is_match(c)) {
            return Some(found);
        }
        if !recursive {
            break;
        }
        stack.extend(current.children().iter().rev().filter(|&c| descend_into(c)));
    }
    None
}

/// Returns the first child element with the given id.
pub fn first_with_id<'a>(node: &'a Node, id: &str) -> Option<&'a Node> {
    find_first_with_id(node, id, false)
}

/// Recursive variant of [`first_with_id`].
///
/// Children are checked before any of them is descended into, so a match one
/// level down beats a match nested inside an earlier sibling. Only element
/// children are descended into.
pub fn first_with_id_r<'a>(node: &'a Node, id: &str) -> Option<&'a Node> {
    find_first_with_id(node, id, true)
}

pub(crate) fn find_first_with_id<'a>(node: &'a Node, id: &str, recursive: bool) -> Option<&'a Node> {
    find_first(node, recursive, Node::is_element, |c| has_id(c, id))
}

/// Returns the first child that has the given class.
pub fn first_with_class_name<'a>(node: &'a Node, class_name: &str) -> Option<&'a Node> {
    find_first_with_class_name(node, class_name, false)
}

/// Recursive variant of [`first_with_class_name`]. Descends into children of
/// every kind.
pub fn first_with_class_name_r<'a>(node: &'a Node, class_name: &str) -> Option<&'a Node> {
    find_first_with_class_name(node, class_name, true)
}

pub(crate) fn find_first_with_class_name<'a>(
    node: &'a Node,
    class_name: &str,
    recursive: bool,
) -> Option<&'a Node> {
    find_first(node, recursive, any_child, |c| has_class(c, class_name))
}

/// Returns `node` itself if it has the given class.
///
/// Unlike [`all_with_tag`], the class family tests the starting node rather
/// than its children. The result therefore holds at most one node.
pub fn all_with_class_name<'a>(node: &'a Node, class_name: &str) -> Vec<&'a Node> {
    find_all_with_class_name(node, class_name, false)
}

/// Returns `node` (if it has the given class) followed by every descendant
/// with the class, in document order.
pub fn all_with_class_name_r<'a>(node: &'a Node, class_name: &str) -> Vec<&'a Node> {
    find_all_with_class_name(node, class_name, true)
}

pub(crate) fn find_all_with_class_name<'a>(
    node: &'a Node,
    class_name: &str,
    recursive: bool,
) -> Vec<&'a Node> {
    let mut res = Vec::new();
    if !recursive {
        if has_class(node, class_name) {
            res.push(node);
        }
        return res;
    }
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if has_class(current, class_name) {
            res.push(current);
        }
        stack.extend(current.children().iter().rev());
    }
    res
}

/// Returns the first child element with the given tag.
pub fn first_with_tag<'a>(node: &'a Node, tag_name: &str) -> Option<&'a Node> {
    find_first_with_tag(node, tag_name, false)
}

/// Recursive variant of [`first_with_tag`]. Only element children are
/// descended into.
pub fn first_with_tag_r<'a>(node: &'a Node, tag_name: &str) -> Option<&'a Node> {
    find_first_with_tag(node, tag_name, true)
}

pub(crate) fn find_first_with_tag<'a>(
    node: &'a Node,
    tag_name: &str,
    recursive: bool,
) -> Option<&'a Node> {
    find_first(node, recursive, Node::is_element, |c| is_tag(c, tag_name))
}

/// Returns all child elements with the given tag. The starting node is never
/// part of the result.
pub fn all_with_tag<'a>(node: &'a Node, tag_name: &str) -> Vec<&'a Node> {
    find_all_with_tag(node, tag_name, false)
}

/// Returns all descendant elements with the given tag, in document order.
pub fn all_with_tag_r<'a>(node: &'a Node, tag_name: &str) -> Vec<&'a Node> {
    find_all_with_tag(node, tag_name, true)
}

pub(crate) fn find_all_with_tag<'a>(node: &'a Node, tag_name: &str, recursive: bool) -> Vec<&'a Node> {
    if !recursive {
        return node.children().iter().filter(|c| is_tag(c, tag_name)).collect();
    }
    let mut res = Vec::new();
    let mut stack: Vec<&Node> = node.children().iter().rev().collect();
    while let Some(current) = stack.pop() {
        if is_tag(current, tag_name) {
            res.push(current);
        }
        stack.extend(current.children().iter().rev());
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    /// ```text
    /// <div id="root" class="box">
    ///   text
    ///   <section id="s1" class="box wide">
    ///     <p id="deep" class="c">one</p>
    ///     <span class="c">two</span>
    ///   </section>
    ///   <p id="p2" class="c">three</p>
    ///   <!-- comment -->
    ///   <section id="s2">
    ///     <p id="deep2">four</p>
    ///   </section>
    /// </div>
    /// ```
    fn fixture() -> Node {
        Node::element_with_attrs("div", vec![("id", "root"), ("class", "box")])
            .with_child(Node::text("text"))
            .with_child(
                Node::element_with_attrs("section", vec![("id", "s1"), ("class", "box wide")])
                    .with_child(
                        Node::element_with_attrs("p", vec![("id", "deep"), ("class", "c")])
                            .with_child(Node::text("one")),
                    )
                    .with_child(
                        Node::element_with_attrs("span", vec![("class", "c")])
                            .with_child(Node::text("two")),
                    ),
            )
            .with_child(
                Node::element_with_attrs("p", vec![("id", "p2"), ("class", "c")])
                    .with_child(Node::text("three")),
            )
            .with_child(Node::comment("comment"))
            .with_child(
                Node::element_with_attrs("section", vec![("id", "s2")]).with_child(
                    Node::element_with_attrs("p", vec![("id", "deep2")])
                        .with_child(Node::text("four")),
                ),
            )
    }

    fn ids<'a>(nodes: &[&'a Node]) -> Vec<&'a str> {
        nodes.iter().map(|n| attr(*n, "id")).collect()
    }

    #[test]
    fn test_first_with_id_shallow() {
        let root = fixture();
        assert_eq!(first_with_id(&root, "p2").map(|n| attr(n, "id")), Some("p2"));
        assert!(first_with_id(&root, "deep").is_none());
        // The starting node is not a candidate.
        assert!(first_with_id(&root, "root").is_none());
    }

    #[test]
    fn test_first_with_id_recursive() {
        let root = fixture();
        let deep = first_with_id_r(&root, "deep").unwrap();
        assert_eq!(deep.tag_name(), Some("p"));
        assert!(first_with_id_r(&root, "deep2").is_some());
        assert!(first_with_id_r(&root, "nope").is_none());
    }

    #[test]
    fn test_first_with_id_prefers_shallower_match() {
        let root = Node::element("div")
            .with_child(
                Node::element("section")
                    .with_child(Node::element_with_attrs("p", vec![("id", "dup"), ("class", "nested")])),
            )
            .with_child(Node::element_with_attrs("p", vec![("id", "dup"), ("class", "top")]));
        let found = first_with_id_r(&root, "dup").unwrap();
        assert_eq!(attr(found, "class"), "top");
    }

    #[test]
    fn test_first_with_id_skips_non_elements() {
        let root = Node::element("div").with_child(Node::text("id"));
        assert!(first_with_id_r(&root, "").is_none());
        // An element without any id has an empty id.
        let root = Node::element("div").with_child(Node::element("span"));
        assert_eq!(first_with_id(&root, "").and_then(|n| n.tag_name()), Some("span"));
    }

    #[test]
    fn test_first_with_class_name() {
        let root = fixture();
        assert_eq!(first_with_class_name(&root, "c").map(|n| attr(n, "id")), Some("p2"));
        assert_eq!(first_with_class_name(&root, "wide").map(|n| attr(n, "id")), Some("s1"));
        assert!(first_with_class_name(&root, "box").is_some());
        assert!(first_with_class_name(&root, "nope").is_none());
    }

    #[test]
    fn test_first_with_class_name_recursive() {
        let root = fixture();
        let section = root.children()[1].clone();
        // Shallow scan of the section's children wins before descending.
        assert_eq!(first_with_class_name_r(&section, "c").map(|n| attr(n, "id")), Some("deep"));

        let wrapper = Node::element("div").with_child(
            Node::element("ul").with_child(Node::element_with_attrs("li", vec![("class", "item")])),
        );
        assert_eq!(
            first_with_class_name_r(&wrapper, "item").and_then(|n| n.tag_name()),
            Some("li")
        );
        assert!(first_with_class_name(&wrapper, "item").is_none());
    }

    #[test]
    fn test_all_with_class_name_includes_self() {
        let root = fixture();
        let shallow = all_with_class_name(&root, "box");
        assert_eq!(shallow.len(), 1);
        assert!(ptr::eq(shallow[0], &root));

        // Non-recursive form never looks at children.
        assert!(all_with_class_name(&root, "c").is_empty());
    }

    #[test]
    fn test_all_with_class_name_recursive_order() {
        let root = fixture();
        assert_eq!(ids(&all_with_class_name_r(&root, "box")), vec!["root", "s1"]);
        assert_eq!(ids(&all_with_class_name_r(&root, "c")), vec!["deep", "", "p2"]);
        assert!(all_with_class_name_r(&root, "nope").is_empty());
    }

    #[test]
    fn test_first_with_tag() {
        let root = fixture();
        assert_eq!(first_with_tag(&root, "p").map(|n| attr(n, "id")), Some("p2"));
        assert_eq!(first_with_tag(&root, "section").map(|n| attr(n, "id")), Some("s1"));
        assert!(first_with_tag(&root, "span").is_none());
        assert!(first_with_tag(&root, "div").is_none());
    }

    #[test]
    fn test_first_with_tag_recursive() {
        let root = fixture();
        assert_eq!(first_with_tag_r(&root, "span").and_then(|n| n.tag_name()), Some("span"));
        // Immediate children are scanned before descending.
        assert_eq!(first_with_tag_r(&root, "p").map(|n| attr(n, "id")), Some("p2"));
        // Tag names are compared exactly.
        assert!(first_with_tag_r(&root, "SPAN").is_none());
    }

    #[test]
    fn test_all_with_tag() {
        let root = fixture();
        assert_eq!(ids(&all_with_tag(&root, "section")), vec!["s1", "s2"]);
        assert_eq!(ids(&all_with_tag(&root, "p")), vec!["p2"]);
        assert!(all_with_tag(&root, "div").is_empty());
    }

    #[test]
    fn test_all_with_tag_recursive_order() {
        let root = fixture();
        assert_eq!(ids(&all_with_tag_r(&root, "p")), vec!["deep", "p2", "deep2"]);
        assert_eq!(ids(&all_with_tag_r(&root, "section")), vec!["s1", "s2"]);
    }

    #[test]
    fn test_all_with_tag_recursive_parent_before_descendants() {
        let root = Node::element("ul").with_child(
            Node::element_with_attrs("li", vec![("id", "outer")]).with_child(
                Node::element("ul").with_child(Node::element_with_attrs("li", vec![("id", "inner")])),
            ),
        );
        assert_eq!(ids(&all_with_tag_r(&root, "li")), vec!["outer", "inner"]);
        // The starting node is never included even when its tag matches.
        assert_eq!(all_with_tag_r(&root, "ul").len(), 1);
    }

    #[test]
    fn test_results_point_into_tree() {
        let root = fixture();
        let a = all_with_tag_r(&root, "p");
        let b = all_with_tag_r(&root, "p");
        assert!(a.iter().zip(&b).all(|(x, y)| ptr::eq(*x, *y)));
        assert!(ptr::eq(a[1], &root.children()[2]));
    }

    #[test]
    fn test_descent_scope_differs_under_non_element_children() {
        // A document node nested in an element holds children of its own.
        let root = Node::element("div").with_child(
            Node::document().with_child(
                Node::element_with_attrs("p", vec![("id", "target"), ("class", "hit")])
                    .with_child(Node::text("inside")),
            ),
        );

        assert!(first_with_id_r(&root, "target").is_none());
        assert!(first_with_tag_r(&root, "p").is_none());

        let by_class = first_with_class_name_r(&root, "hit").unwrap();
        assert_eq!(attr(by_class, "id"), "target");
        assert_eq!(ids(&all_with_class_name_r(&root, "hit")), vec!["target"]);
        assert_eq!(ids(&all_with_tag_r(&root, "p")), vec!["target"]);
    }

    /// `<div><div>...<span id="bottom" class="leaf"></span>...</div></div>`,
    /// `depth` divs deep.
    fn chain(depth: usize) -> Node {
        let mut node = Node::element_with_attrs("span", vec![("id", "bottom"), ("class", "leaf")]);
        for _ in 0..depth {
            node = Node::element("div").with_child(node);
        }
        node
    }

    #[test]
    fn test_deep_tree_does_not_exhaust_stack() {
        let root = chain(100_000);

        assert_eq!(first_with_id_r(&root, "bottom").and_then(|n| n.tag_name()), Some("span"));
        assert!(first_with_id_r(&root, "nope").is_none());
        assert!(first_with_tag_r(&root, "span").is_some());
        assert!(first_with_class_name_r(&root, "leaf").is_some());
        assert_eq!(all_with_tag_r(&root, "div").len(), 99_999);
        assert_eq!(all_with_class_name_r(&root, "leaf").len(), 1);
    }
}
