//! Lenient HTML parsing into a queryable tree.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::source::DocumentSource;

/// In-memory DOM tree of one page, owned for the duration of a single run.
#[derive(Debug)]
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    /// First element matching `css`, in document order.
    ///
    /// Returns `None` when nothing matches or `css` is not a valid selector.
    #[must_use]
    pub fn select_first(&self, css: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(css).ok()?;
        self.html.select(&selector).next()
    }

    /// The root `<html>` element. Always present after parsing.
    #[must_use]
    pub fn root_element(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// Number of element nodes in the tree.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.html
            .tree
            .nodes()
            .filter(|node| node.value().is_element())
            .count()
    }

    /// Number of markup errors the parser recovered from.
    #[must_use]
    pub fn diagnostics(&self) -> usize {
        self.html.errors.len()
    }
}

/// Parse raw page text into a [`ParsedDocument`].
///
/// Parsing follows HTML5 error recovery: unclosed tags, stray end tags, NUL
/// characters and similar problems are repaired and only counted in
/// [`ParsedDocument::diagnostics`].
///
/// # Errors
///
/// Never fails for text input; every UTF-8 string parses to a tree. The
/// [`LoadError`] return leaves room for [`crate::LoadErrorKind::Parse`] should
/// a stricter parser be plugged in.
pub fn parse(source: &DocumentSource) -> Result<ParsedDocument, LoadError> {
    let html = Html::parse_document(source.text());
    let document = ParsedDocument { html };

    if document.diagnostics() > 0 {
        warn!(
            file = %source.path().display(),
            diagnostics = document.diagnostics(),
            "parser recovered from malformed markup"
        );
    }
    debug!(
        file = %source.path().display(),
        elements = document.element_count(),
        "parsed page"
    );
    Ok(document)
}
