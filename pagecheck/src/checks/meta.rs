//! Attribute checks: charset and viewport meta elements, root `lang`.

use crate::checks::CheckKind;
use crate::config::Expectations;
use crate::document::ParsedDocument;
use crate::error::AssertionFailure;

const CHARSET_SELECTOR: &str = "meta[charset]";
const VIEWPORT_SELECTOR: &str = r#"meta[name="viewport"]"#;

/// Verify `meta[charset]` equals the expected charset and the viewport meta
/// `content` contains the expected width directive.
///
/// Each failure carries the value actually found, or `None` if the element
/// or attribute is absent.
#[must_use]
pub fn check_meta(document: &ParsedDocument, expected: &Expectations) -> Vec<AssertionFailure> {
    let mut failures = Vec::new();

    let charset = document
        .select_first(CHARSET_SELECTOR)
        .and_then(|meta| meta.value().attr("charset"));
    if charset != Some(expected.charset.as_str()) {
        failures.push(AssertionFailure::new(
            CheckKind::Meta,
            CHARSET_SELECTOR,
            expected.charset.as_str(),
            charset.map(str::to_owned),
        ));
    }

    let viewport = document
        .select_first(VIEWPORT_SELECTOR)
        .and_then(|meta| meta.value().attr("content"));
    if !viewport.is_some_and(|content| content.contains(&expected.viewport_width)) {
        failures.push(AssertionFailure::new(
            CheckKind::Meta,
            format!("{VIEWPORT_SELECTOR} content"),
            format!("contains {}", expected.viewport_width),
            viewport.map(str::to_owned),
        ));
    }

    failures
}

/// Verify the root `<html>` element carries the expected `lang` attribute.
#[must_use]
pub fn check_lang_attribute(
    document: &ParsedDocument,
    expected: &Expectations,
) -> Vec<AssertionFailure> {
    let lang = document.root_element().value().attr("lang");
    if lang == Some(expected.lang.as_str()) {
        return Vec::new();
    }
    vec![AssertionFailure::new(
        CheckKind::LangAttribute,
        "html[lang]",
        expected.lang.as_str(),
        lang.map(str::to_owned),
    )]
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

    fn head(inner: &str) -> ParsedDocument {
        doc(&format!(
            "<!DOCTYPE html><html lang=\"en\"><head>{inner}</head><body></body></html>"
        ))
    }

    const GOOD_META: &str = r#"<meta charset="UTF-8"><meta name="viewport" content="width=device-width, initial-scale=1.0">"#;

    #[test]
    fn test_meta_passes() {
        assert!(check_meta(&head(GOOD_META), &Expectations::default()).is_empty());
    }

    #[test]
    fn test_meta_missing_charset() {
        let failures = check_meta(
            &head(r#"<meta name="viewport" content="width=device-width">"#),
            &Expectations::default(),
        );

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].subject, "meta[charset]");
        assert_eq!(failures[0].expected, "UTF-8");
        assert_eq!(failures[0].actual, None);
    }

    #[test]
    fn test_meta_charset_is_case_sensitive() {
        let failures = check_meta(
            &head(r#"<meta charset="utf-8"><meta name="viewport" content="width=device-width">"#),
            &Expectations::default(),
        );

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].actual.as_deref(), Some("utf-8"));
    }

    #[test]
    fn test_meta_viewport_without_width() {
        let failures = check_meta(
            &head(r#"<meta charset="UTF-8"><meta name="viewport" content="initial-scale=1.0">"#),
            &Expectations::default(),
        );

        assert_eq!(failures.len(), 1);
        assert!(failures[0].subject.starts_with(VIEWPORT_SELECTOR));
        assert_eq!(failures[0].actual.as_deref(), Some("initial-scale=1.0"));
    }

    #[test]
    fn test_meta_reports_both_missing() {
        let failures = check_meta(&head(""), &Expectations::default());
        assert_eq!(failures.len(), 2);
    }

    #[test]
    fn test_lang_passes() {
        assert!(check_lang_attribute(&head(GOOD_META), &Expectations::default()).is_empty());
    }

    #[test]
    fn test_lang_missing_reports_null() {
        let failures = check_lang_attribute(
            &doc("<!DOCTYPE html><html><head></head><body></body></html>"),
            &Expectations::default(),
        );

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].expected, "en");
        assert_eq!(failures[0].actual, None);
        assert!(failures[0].format_human_readable().ends_with("got null"));
    }

    #[test]
    fn test_lang_other_value() {
        let failures = check_lang_attribute(
            &doc("<!DOCTYPE html><html lang=\"de\"><head></head><body></body></html>"),
            &Expectations::default(),
        );

        assert_eq!(failures[0].actual.as_deref(), Some("de"));
    }
}
