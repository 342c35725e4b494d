//! Raw-text content checks and file readability.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::checks::CheckKind;
use crate::config::Expectations;
use crate::error::AssertionFailure;

/// Deployment-related copy the page must mention, as case-insensitive patterns.
/// The separator in `CI.?CD` is optional, so `CI/CD`, `CI CD` and `CICD` all match.
const KEYWORD_PATTERNS: &[&str] = &[r"(?i)CI.?CD", r"(?i)GitHub Pages", r"(?i)deployment"];

static KEYWORDS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    KEYWORD_PATTERNS
        .iter()
        .map(|pattern| match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(err) => panic!("Invalid keyword regex {pattern}: {err}"),
        })
        .collect()
});

/// Verify each deployment keyword pattern matches somewhere in the raw text.
#[must_use]
pub fn check_content_keywords(raw: &str) -> Vec<AssertionFailure> {
    KEYWORDS
        .iter()
        .filter(|regex| !regex.is_match(raw))
        .map(|regex| {
            AssertionFailure::new(CheckKind::ContentKeywords, "raw text", regex.as_str(), None)
        })
        .collect()
}

/// Verify the viewport width and initial-scale markers appear verbatim.
#[must_use]
pub fn check_responsive_markers(raw: &str, expected: &Expectations) -> Vec<AssertionFailure> {
    [&expected.viewport_width, &expected.initial_scale]
        .into_iter()
        .filter(|marker| !raw.contains(marker.as_str()))
        .map(|marker| {
            AssertionFailure::new(
                CheckKind::ResponsiveMarkers,
                "raw text",
                marker.as_str(),
                None,
            )
        })
        .collect()
}

/// Verify `path` exists and the text read from it is non-empty.
#[must_use]
pub fn check_file_readable(path: &Path, raw: &str) -> Vec<AssertionFailure> {
    let mut failures = Vec::new();
    if !path.exists() {
        failures.push(AssertionFailure::new(
            CheckKind::FileReadable,
            path.display().to_string(),
            "exists",
            None,
        ));
    }
    if raw.is_empty() {
        failures.push(AssertionFailure::new(
            CheckKind::FileReadable,
            "text length",
            "> 0",
            Some("0".to_owned()),
        ));
    }
    failures
}
