//! Selector dispatch: pick one traversal family and run it.

use crate::node::Node;
use crate::traverse::{
    find_all_with_class_name, find_all_with_tag, find_first_with_class_name, find_first_with_id,
    find_first_with_tag,
};

/// Describes what to look for below a node.
///
/// Only one field is used per query. An id takes precedence over a class
/// name, which takes precedence over a tag; empty fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    /// Selects an element with a given id
    pub id: String,
    /// Selects an element with a given class
    pub class_name: String,
    /// Selects an element with a given tag
    pub tag: String,
    /// Include the children's subtrees in the search
    pub recursive: bool,
}

/// The single search a [`Selector`] resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion<'s> {
    Id(&'s str),
    ClassName(&'s str),
    Tag(&'s str),
}

impl Selector {
    /// Select by id
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Select by class name
    pub fn class_name(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Self::default()
        }
    }

    /// Select by tag name
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Search the whole subtree instead of immediate children only
    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    /// The criterion that wins under id > class name > tag precedence, or
    /// `None` for an empty selector.
    pub fn criterion(&self) -> Option<Criterion<'_>> {
        if !self.id.is_empty() {
            Some(Criterion::Id(&self.id))
        } else if !self.class_name.is_empty() {
            Some(Criterion::ClassName(&self.class_name))
        } else if !self.tag.is_empty() {
            Some(Criterion::Tag(&self.tag))
        } else {
            None
        }
    }
}

/// Selects all nodes below `node` that match the selector.
///
/// An id selector yields at most one node. A class selector follows
/// [`all_with_class_name`](crate::all_with_class_name) and may return `node`
/// itself. An empty selector matches nothing.
pub fn select_all<'a>(node: &'a Node, selector: &Selector) -> Vec<&'a Node> {
    let res = match selector.criterion() {
        Some(Criterion::Id(id)) => find_first_with_id(node, id, selector.recursive)
            .into_iter()
            .collect(),
        Some(Criterion::ClassName(class_name)) => {
            find_all_with_class_name(node, class_name, selector.recursive)
        }
        Some(Criterion::Tag(tag)) => find_all_with_tag(node, tag, selector.recursive),
        None => Vec::new(),
    };
    tracing::trace!(
        criterion = ?selector.criterion(),
        recursive = selector.recursive,
        matches = res.len(),
        "select_all"
    );
    res
}

/// Selects the first node below `node` that matches the selector.
pub fn select_first<'a>(node: &'a Node, selector: &Selector) -> Option<&'a Node> {
    let res = match selector.criterion()? {
        Criterion::Id(id) => find_first_with_id(node, id, selector.recursive),
        Criterion::ClassName(class_name) => {
            find_first_with_class_name(node, class_name, selector.recursive)
        }
        Criterion::Tag(tag) => find_first_with_tag(node, tag, selector.recursive),
    };
    tracing::trace!(
        criterion = ?selector.criterion(),
        recursive = selector.recursive,
        found = res.is_some(),
        "select_first"
    );
    res
}
