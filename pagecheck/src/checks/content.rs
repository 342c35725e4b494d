//! Exact-text checks on the title, heading and paragraph.

use crate::checks::CheckKind;
use crate::config::Expectations;
use crate::document::ParsedDocument;
use crate::error::AssertionFailure;

/// Compare the full text content of the first `css` match against `expected`.
///
/// Text is the concatenation of all descendant text nodes, untrimmed.
fn check_element_text(
    check: CheckKind,
    document: &ParsedDocument,
    css: &str,
    expected: &str,
) -> Vec<AssertionFailure> {
    let actual: Option<String> = document
        .select_first(css)
        .map(|element| element.text().collect());

    if actual.as_deref() == Some(expected) {
        return Vec::new();
    }
    vec![AssertionFailure::new(check, css, expected, actual)]
}

/// Verify the `<title>` text equals the expected title exactly.
#[must_use]
pub fn check_title(document: &ParsedDocument, expected: &Expectations) -> Vec<AssertionFailure> {
    check_element_text(CheckKind::Title, document, "title", &expected.title)
}

/// Verify the first `<h1>` text equals the expected heading exactly.
#[must_use]
pub fn check_heading(document: &ParsedDocument, expected: &Expectations) -> Vec<AssertionFailure> {
    check_element_text(CheckKind::Heading, document, "h1", &expected.heading)
}

/// Verify the first `<p>` text equals the expected paragraph exactly.
#[must_use]
pub fn check_paragraph(
    document: &ParsedDocument,
    expected: &Expectations,
) -> Vec<AssertionFailure> {
    check_element_text(CheckKind::Paragraph, document, "p", &expected.paragraph)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::document::parse;
    use crate::source::DocumentSource;

    fn doc(text: &str) -> ParsedDocument {
        parse(&DocumentSource::new("index.html", text)).unwrap()
    }

    #[test]
    fn test_title_exact_match() {
        let page = doc("<html><head><title>DevOps and CI CD</title></head></html>");
        assert!(check_title(&page, &Expectations::default()).is_empty());
    }

    #[test]
    fn test_title_is_not_trimmed() {
        let page = doc("<html><head><title> DevOps and CI CD </title></head></html>");
        let failures = check_title(&page, &Expectations::default());

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].actual.as_deref(), Some(" DevOps and CI CD "));
    }

    #[test]
    fn test_title_missing() {
        let failures = check_title(&doc("<p>no title</p>"), &Expectations::default());

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].check, CheckKind::Title);
        assert_eq!(failures[0].actual, None);
    }

    #[test]
    fn test_heading_includes_nested_text() {
        let page = doc("<h1>Automatic <em>deployment</em> to GitHub Pages</h1>");
        assert!(check_heading(&page, &Expectations::default()).is_empty());
    }

    #[test]
    fn test_heading_mismatch() {
        let failures = check_heading(&doc("<h1>Manual deployment</h1>"), &Expectations::default());

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].expected, "Automatic deployment to GitHub Pages");
        assert_eq!(failures[0].actual.as_deref(), Some("Manual deployment"));
    }

    #[test]
    fn test_paragraph_checks_first_only() {
        let page = doc("<p>Simple HTML via CI/CD</p><p>second</p>");
        assert!(check_paragraph(&page, &Expectations::default()).is_empty());

        let page = doc("<p>first</p><p>Simple HTML via CI/CD</p>");
        assert_eq!(check_paragraph(&page, &Expectations::default()).len(), 1);
    }

    #[test]
    fn test_custom_expectations() {
        let mut expected = Expectations::default();
        expected.title = "Home".to_owned();

        let page = doc("<title>Home</title>");
        assert!(check_title(&page, &expected).is_empty());
    }
}
