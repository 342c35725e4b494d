//! Structural checks: required markup in the raw text, and a sane parsed tree.

use std::sync::LazyLock;

use regex::Regex;

use crate::checks::CheckKind;
use crate::document::ParsedDocument;
use crate::error::AssertionFailure;

/// Required markers as `(label, case-insensitive pattern)`.
const STRUCTURE_MARKERS: &[(&str, &str)] = &[
    ("<!DOCTYPE html>", r"(?i)<!DOCTYPE html>"),
    ("<html>", r"(?i)<html[^>]*>"),
    ("<head>", r"(?i)<head>"),
    ("<body>", r"(?i)<body>"),
    ("</html>", r"(?i)</html>"),
];

static STRUCTURE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    STRUCTURE_MARKERS
        .iter()
        .map(|&(label, pattern)| match Regex::new(pattern) {
            Ok(regex) => (label, regex),
            Err(err) => panic!("Invalid structure regex {label}: {err}"),
        })
        .collect()
});

/// Verify the doctype, `<html>`, `<head>`, `<body>` and `</html>` markers.
///
/// Matching is on the raw text, before any parser repair, so a marker the
/// parser would have synthesized still counts as missing. One failure per
/// missing marker.
#[must_use]
pub fn check_structure(raw: &str) -> Vec<AssertionFailure> {
    STRUCTURE_PATTERNS
        .iter()
        .filter(|(_, regex)| !regex.is_match(raw))
        .map(|(label, regex)| {
            AssertionFailure::new(CheckKind::Structure, *label, regex.as_str(), None)
        })
        .collect()
}

/// Verify the tree holds at least one element and resolves `head` and `body`.
#[must_use]
pub fn check_non_empty(document: &ParsedDocument) -> Vec<AssertionFailure> {
    let mut failures = Vec::new();

    let count = document.element_count();
    if count == 0 {
        failures.push(AssertionFailure::new(
            CheckKind::NonEmpty,
            "element count",
            "> 0",
            Some(count.to_string()),
        ));
    }

    for section in ["head", "body"] {
        if document.select_first(section).is_none() {
            failures.push(AssertionFailure::new(
                CheckKind::NonEmpty,
                section,
                "present",
                None,
            ));
        }
    }

    failures
}
