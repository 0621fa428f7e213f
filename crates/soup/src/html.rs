//! HTML parsing support.
//!
//! This module parses HTML with scraper (html5ever) and converts the result
//! into the owned [`Node`] tree the selection functions run on.

use std::io::Read;

use scraper::{ElementRef, Html, Node as ScraperNode};
use soup_core::Node;

use crate::options::{ParseMode, ParseOptions};
use crate::{Result, SoupError};

/// Parse a complete HTML document from a reader.
///
/// The input must be UTF-8; anything else is reported as
/// [`SoupError::Io`].
pub fn parse<R: Read>(reader: R) -> Result<Node> {
    parse_reader(reader, &ParseOptions::default())
}

/// Parse HTML from a reader with custom options.
pub fn parse_reader<R: Read>(mut reader: R, options: &ParseOptions) -> Result<Node> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_with_options(&input, options)
}

/// Parse an HTML string as a complete document.
///
/// # Example
///
/// ```rust
/// use soup::{parse_html, NodeRef};
///
/// let doc = parse_html("<ul><li id=\"a\">One</li></ul>");
/// let li = NodeRef::new(&doc).first_with_id_r("a").unwrap();
/// assert_eq!(li.text_content(), "One");
/// ```
pub fn parse_html(html: &str) -> Node {
    convert(&Html::parse_document(html), &ParseOptions::default())
}

/// Parse an HTML fragment. The returned root is an `html` element.
pub fn parse_fragment(html: &str) -> Node {
    let options = ParseOptions::default().with_mode(ParseMode::Fragment);
    convert(&Html::parse_fragment(html), &options)
}

/// Parse an HTML string with custom options.
///
/// Parser diagnostics are only an error in strict mode; otherwise the tree
/// html5ever recovered is returned as is.
pub fn parse_with_options(html: &str, options: &ParseOptions) -> Result<Node> {
    let document = match options.mode {
        ParseMode::Document => Html::parse_document(html),
        ParseMode::Fragment => Html::parse_fragment(html),
    };

    tracing::debug!(
        mode = ?options.mode,
        bytes = html.len(),
        diagnostics = document.errors.len(),
        "parsed html"
    );

    if options.strict {
        if let Some(first) = document.errors.first() {
            for error in &document.errors {
                tracing::warn!(error = %error, "html parse diagnostic");
            }
            return Err(SoupError::Parse(first.to_string()));
        }
    }

    Ok(convert(&document, options))
}

fn convert(document: &Html, options: &ParseOptions) -> Node {
    match options.mode {
        ParseMode::Fragment => convert_element(document.root_element(), options),
        ParseMode::Document => {
            let mut root = Node::document();
            for child in document.tree.root().children() {
                if let Some(node) = convert_child(ElementRef::wrap(child), child.value(), options) {
                    root.add_child(node);
                }
            }
            root
        }
    }
}

/// Whitespace as the HTML tokenizer defines it, form feed included
const HTML_WHITESPACE: &[char] = &[' ', '\t', '\n', '\x0C', '\r'];

/// Convert a scraper ElementRef to our Node structure
///
/// The subtree is walked in document order and built bottom-up from a stack
/// of nodes that are still open, so nesting depth never grows the call stack.
fn convert_element(element: ElementRef, options: &ParseOptions) -> Node {
    let mut root = element_node(element);
    let mut open: Vec<(_, Node)> = Vec::new();

    for descendant in element.descendants().skip(1) {
        close_until(&mut root, &mut open, descendant.parent().map(|p| p.id()));
        let node = match ElementRef::wrap(descendant) {
            Some(child) => element_node(child),
            None => match convert_leaf(descendant.value(), options) {
                Some(node) => node,
                None => continue,
            },
        };
        open.push((descendant.id(), node));
    }
    close_until(&mut root, &mut open, None);

    root
}

/// Pops open nodes into their parents until `parent` is on top. Nodes left
/// without an open parent belong to `root`.
fn close_until<Id: PartialEq>(root: &mut Node, open: &mut Vec<(Id, Node)>, parent: Option<Id>) {
    while let Some((id, _)) = open.last() {
        if Some(id) == parent.as_ref() {
            break;
        }
        let Some((_, node)) = open.pop() else { break };
        match open.last_mut() {
            Some((_, enclosing)) => enclosing.add_child(node),
            None => root.add_child(node),
        }
    }
}

fn element_node(element: ElementRef) -> Node {
    // Collect attributes, in source order
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    Node::element_with_attrs(element.value().name(), attrs)
}

fn convert_child(
    element: Option<ElementRef>,
    value: &ScraperNode,
    options: &ParseOptions,
) -> Option<Node> {
    match element {
        Some(element) => Some(convert_element(element, options)),
        None => convert_leaf(value, options),
    }
}

fn convert_leaf(value: &ScraperNode, options: &ParseOptions) -> Option<Node> {
    match value {
        ScraperNode::Text(text) => {
            if !options.keep_whitespace_text && text.text.trim_matches(HTML_WHITESPACE).is_empty() {
                return None;
            }
            Some(Node::text(&text.text))
        }
        ScraperNode::Comment(comment) if options.keep_comments => {
            Some(Node::comment(&comment.comment))
        }
        ScraperNode::Doctype(doctype) => Some(Node::doctype(doctype.name())),
        _ => None,
    }
}
