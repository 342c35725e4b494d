//! Error types for page checking.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::checks::CheckKind;

/// The kind of load-level failure that aborted a run.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum LoadErrorKind {
    /// The file does not exist.
    NotFound,
    /// The file exists but could not be read as a non-empty UTF-8 document
    /// (I/O error, size limit, invalid encoding, empty file).
    Read,
    /// The text could not be interpreted as a document at all.
    ///
    /// Not produced for UTF-8 text: HTML5 parsing recovers from any markup.
    Parse,
}

impl fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotFound => "not found",
            Self::Read => "read error",
            Self::Parse => "parse error",
        };
        f.write_str(label)
    }
}

/// A failure that prevented the checklist from running.
///
/// Every check depends on the loaded text, so any `LoadError` aborts the run
/// before a single checklist item executes.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Error)]
#[error("{}: [{}] {}", .file.display(), .kind, .message)]
#[non_exhaustive]
pub struct LoadError {
    /// The file that could not be loaded.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: LoadErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl LoadError {
    /// Build a load error for `file`.
    #[must_use]
    pub fn new(
        file: impl Into<PathBuf>,
        kind: LoadErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            kind,
            message: message.into(),
        }
    }
}

/// A single checklist expectation that was not met.
///
/// Failures are data, not errors: they are collected into the report and never
/// stop other checklist items from running.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct AssertionFailure {
    /// The checklist item that produced this failure.
    pub check: CheckKind,
    /// What was inspected: a selector, attribute or raw-text marker.
    pub subject: String,
    /// The expected value or pattern.
    pub expected: String,
    /// The observed value; `None` when the element or attribute was absent.
    pub actual: Option<String>,
}

impl AssertionFailure {
    /// Build a failure for one unmet expectation of `check`.
    #[must_use]
    pub fn new(
        check: CheckKind,
        subject: impl Into<String>,
        expected: impl Into<String>,
        actual: Option<String>,
    ) -> Self {
        Self {
            check,
            subject: subject.into(),
            expected: expected.into(),
            actual,
        }
    }

    /// Format the failure for human-readable output.
    ///
    /// `{check}: {subject}: expected "{expected}", got "{actual}"` with `null`
    /// (unquoted) standing in for an absent value.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        let actual = self
            .actual
            .as_ref()
            .map_or_else(|| "null".to_owned(), |value| format!("\"{value}\""));
        format!(
            "{}: {}: expected \"{}\", got {}",
            self.check, self.subject, self.expected, actual
        )
    }
}
