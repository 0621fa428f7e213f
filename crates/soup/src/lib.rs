//! # soup
//!
//! Parse HTML and pick nodes out of it by id, class name or tag.
//!
//! ## Design
//!
//! Parsing and selection are separate. `soup-core` owns the node tree and the
//! search functions; this crate adds HTML ingestion through scraper/html5ever
//! (feature `html`, enabled by default) and re-exports everything from the core.
//!
//! - **No copies**: every search returns references into the parsed tree
//! - **Total queries**: a miss is `None` or an empty `Vec`, never an error
//! - **Parser agnostic**: trees built by hand work the same as parsed ones
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use soup::{parse_html, NodeRef, Selector};
//!
//! let doc = parse_html(r#"<div id="x"><span class="c">Hi</span><a class="c" href="/p">Go</a></div>"#);
//! let root = NodeRef::new(&doc);
//!
//! let div = root.first_with_id_r("x").unwrap();
//! let matches = div.select_all(&Selector::class_name("c").recursive());
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches[1].attr("href"), "/p");
//! assert_eq!(matches[1].text_content(), "Go");
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use soup::{Node, NodeRef};
//!
//! let ul = Node::element("ul")
//!     .with_child(Node::element_with_attrs("li", vec![("class", "item")]).with_child(Node::text("One")));
//!
//! let item = NodeRef::new(&ul).first_with_class_name("item").unwrap();
//! assert_eq!(item.text_content(), "One");
//! ```

#[cfg(feature = "html")]
pub mod html;
#[cfg(feature = "html")]
mod options;

#[cfg(feature = "html")]
pub use html::{parse, parse_fragment, parse_html, parse_reader, parse_with_options};
#[cfg(feature = "html")]
pub use options::{ParseMode, ParseOptions};
pub use soup_core::*;

/// Error type for soup operations
#[derive(Debug, thiserror::Error)]
pub enum SoupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, SoupError>;
