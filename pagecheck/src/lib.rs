//! # pagecheck
//!
//! Structure and content checker for a static HTML page.
//!
//! A run loads one file, parses it once into a DOM tree, and evaluates a fixed
//! checklist of independent items against the raw text and the tree. A failing
//! item never stops the others; only a load or parse failure aborts the run.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pagecheck::{Expectations, SourceConfig, check_file};
//!
//! let report = check_file(&SourceConfig::default(), &Expectations::default()).unwrap();
//! println!("Passed: {}/{}", report.passed_count(), report.outcomes.len());
//! for failure in report.failures() {
//!     println!("{}", failure.format_human_readable());
//! }
//! println!("OK: {}", report.ok);
//! ```

pub mod checks;
mod config;
mod document;
mod error;
pub mod output;
mod report;
mod source;

pub use checks::{CHECKLIST, CheckInput, CheckKind};
pub use config::{DEFAULT_PAGE_PATH, Expectations, SourceConfig};
pub use document::{ParsedDocument, parse};
pub use error::{AssertionFailure, LoadError, LoadErrorKind};
pub use report::{CheckOutcome, ChecklistReport};
pub use source::{DocumentSource, load};

use tracing::debug;

/// Run every checklist item against an already loaded and parsed page.
///
/// Items run in [`CHECKLIST`] order and see the same read-only input, so the
/// report is identical for identical input.
#[must_use]
pub fn run_checklist(
    source: &DocumentSource,
    document: &ParsedDocument,
    expectations: &Expectations,
) -> ChecklistReport {
    let input = CheckInput {
        source,
        document,
        expectations,
    };

    let outcomes: Vec<CheckOutcome> = CHECKLIST
        .iter()
        .map(|&check| {
            let failures = check.run(&input);
            debug!(%check, failures = failures.len(), "checklist item evaluated");
            CheckOutcome::new(check, failures)
        })
        .collect();

    let ok = outcomes.iter().all(|o| o.passed);
    ChecklistReport {
        file: source.path().to_path_buf(),
        outcomes,
        parse_diagnostics: document.diagnostics(),
        ok,
    }
}

/// Load, parse and check the page described by `source_config`.
///
/// This is the primary public API.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file is missing, unreadable, empty or not a
/// text document. No checklist item runs in that case. Checklist failures are
/// never errors; they are reported in the returned [`ChecklistReport`].
pub fn check_file(
    source_config: &SourceConfig,
    expectations: &Expectations,
) -> Result<ChecklistReport, LoadError> {
    let source = load(source_config)?;
    let document = parse(&source)?;
    Ok(run_checklist(&source, &document, expectations))
}
