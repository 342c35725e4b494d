//! The fixed checklist.
//!
//! Each item is a pure function from already-loaded input to a list of
//! [`AssertionFailure`]s; an empty list means the item passed. Items never
//! mutate their input and never depend on each other's outcome.

pub mod content;
pub mod meta;
pub mod structure;
pub mod text;

use std::fmt;

use serde::Serialize;

use crate::config::Expectations;
use crate::document::ParsedDocument;
use crate::error::AssertionFailure;
use crate::source::DocumentSource;

/// One named checklist item.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Doctype, `<html>`, `<head>`, `<body>` and `</html>` markers in the raw text.
    Structure,
    /// Charset and viewport meta elements.
    Meta,
    /// Exact `<title>` text.
    Title,
    /// Exact top-level heading text.
    Heading,
    /// Exact paragraph text.
    Paragraph,
    /// `lang` attribute on the root element.
    LangAttribute,
    /// Tree has elements and resolves both `head` and `body`.
    NonEmpty,
    /// Deployment-related copy in the raw text.
    ContentKeywords,
    /// Viewport scaling markers in the raw text.
    ResponsiveMarkers,
    /// File exists and is non-empty.
    FileReadable,
}

/// Every checklist item, in report order.
pub const CHECKLIST: &[CheckKind] = &[
    CheckKind::Structure,
    CheckKind::Meta,
    CheckKind::Title,
    CheckKind::Heading,
    CheckKind::Paragraph,
    CheckKind::LangAttribute,
    CheckKind::NonEmpty,
    CheckKind::ContentKeywords,
    CheckKind::ResponsiveMarkers,
    CheckKind::FileReadable,
];

impl CheckKind {
    /// Stable `snake_case` name, as used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Meta => "meta",
            Self::Title => "title",
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::LangAttribute => "lang_attribute",
            Self::NonEmpty => "non_empty",
            Self::ContentKeywords => "content_keywords",
            Self::ResponsiveMarkers => "responsive_markers",
            Self::FileReadable => "file_readable",
        }
    }

    /// Run this item against one loaded page.
    #[must_use]
    pub fn run(self, input: &CheckInput<'_>) -> Vec<AssertionFailure> {
        let raw = input.source.text();
        let doc = input.document;
        let expected = input.expectations;
        match self {
            Self::Structure => structure::check_structure(raw),
            Self::Meta => meta::check_meta(doc, expected),
            Self::Title => content::check_title(doc, expected),
            Self::Heading => content::check_heading(doc, expected),
            Self::Paragraph => content::check_paragraph(doc, expected),
            Self::LangAttribute => meta::check_lang_attribute(doc, expected),
            Self::NonEmpty => structure::check_non_empty(doc),
            Self::ContentKeywords => text::check_content_keywords(raw),
            Self::ResponsiveMarkers => text::check_responsive_markers(raw, expected),
            Self::FileReadable => text::check_file_readable(input.source.path(), raw),
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a checklist item may read. Shared read-only across items.
#[derive(Debug, Clone, Copy)]
pub struct CheckInput<'a> {
    /// The raw page text and its path.
    pub source: &'a DocumentSource,
    /// The tree parsed once from `source`.
    pub document: &'a ParsedDocument,
    /// Literals to compare against.
    pub expectations: &'a Expectations,
}
