//! Configuration options for HTML ingestion

/// How the input is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Parse a complete document. The root is a [`Node::Document`](crate::Node::Document)
    /// holding the doctype (if any) and the `html` element.
    #[default]
    Document,
    /// Parse a fragment. The root is the `html` element the fragment
    /// algorithm wraps the content in.
    Fragment,
}

/// Options for parsing HTML into a node tree
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Document or fragment parsing
    pub mode: ParseMode,

    /// Keep comment nodes in the tree
    pub keep_comments: bool,

    /// Keep text nodes made only of spaces, tabs and line breaks
    pub keep_whitespace_text: bool,

    /// Fail on the first parser diagnostic instead of accepting the
    /// recovered tree
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            mode: ParseMode::Document,
            keep_comments: true,
            keep_whitespace_text: true,
            strict: false,
        }
    }
}

impl ParseOptions {
    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn keep_comments(mut self, keep: bool) -> Self {
        self.keep_comments = keep;
        self
    }

    pub fn keep_whitespace_text(mut self, keep: bool) -> Self {
        self.keep_whitespace_text = keep;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
