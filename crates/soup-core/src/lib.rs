//! soup-core - node tree and selection by id, class name or tag
//!
//! This crate holds the node structure and the search functions. It does not
//! parse HTML: `soup` builds trees with html5ever, but any producer works.
//!
//! # Architecture
//!
//! ```text
//!                ┌── Id ─────────▶ first_with_id(_r)
//! Selector ──▶ criterion ── ClassName ─▶ first/all_with_class_name(_r) ──▶ &Node
//!                └── Tag ────────▶ first/all_with_tag(_r)
//! ```
//!
//! Every search borrows from the tree it runs on and never copies nodes.
//!
//! # Example
//!
//! ```rust
//! use soup_core::{select_all, select_first, text_content, Node, Selector};
//!
//! let div = Node::element_with_attrs("div", vec![("id", "x")])
//!     .with_child(Node::element_with_attrs("span", vec![("class", "c")]).with_child(Node::text("Hi")))
//!     .with_child(Node::element_with_attrs("a", vec![("class", "c"), ("href", "/p")]).with_child(Node::text("Go")));
//!
//! let links = select_all(&div, &Selector::class_name("c").recursive());
//! assert_eq!(links.len(), 2);
//!
//! let a = select_first(&div, &Selector::tag("a")).unwrap();
//! assert_eq!(text_content(a), "Go");
//! ```

mod node;
mod node_ref;
mod selector;
mod traverse;
mod utilities;

pub use node::{Attribute, Attributes, Element, Node, NodeType};
pub use node_ref::NodeRef;
pub use selector::{select_all, select_first, Criterion, Selector};
pub use traverse::{
    all_with_class_name, all_with_class_name_r, all_with_tag, all_with_tag_r,
    first_with_class_name, first_with_class_name_r, first_with_id, first_with_id_r,
    first_with_tag, first_with_tag_r,
};
pub use utilities::{attr, has_class, text_content, CLASS_SEPARATOR, TEXT_TRIM_CHARS};
