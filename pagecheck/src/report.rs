//! Checklist report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::checks::CheckKind;
use crate::error::AssertionFailure;

/// Result of one checklist item.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct CheckOutcome {
    /// The checklist item.
    pub check: CheckKind,
    /// Whether the item passed (no failures).
    pub passed: bool,
    /// Every unmet expectation of this item.
    pub failures: Vec<AssertionFailure>,
}

impl CheckOutcome {
    /// Build an outcome; it passes exactly when `failures` is empty.
    #[must_use]
    pub fn new(check: CheckKind, failures: Vec<AssertionFailure>) -> Self {
        Self {
            check,
            passed: failures.is_empty(),
            failures,
        }
    }
}

/// Result of a checklist run over one page.
///
/// CI pipelines only need `ok`; the outcomes explain it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ChecklistReport {
    /// The checked file.
    pub file: PathBuf,
    /// One outcome per checklist item, in checklist order.
    pub outcomes: Vec<CheckOutcome>,
    /// Markup errors the parser recovered from. Informational only.
    pub parse_diagnostics: usize,
    /// Whether every checklist item passed.
    pub ok: bool,
}

impl ChecklistReport {
    /// Number of items that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    /// Number of items that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.passed_count()
    }

    /// Outcome of one item, if it was run.
    #[must_use]
    pub fn outcome(&self, check: CheckKind) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.check == check)
    }

    /// Items that failed, in checklist order.
    pub fn failed_checks(&self) -> impl Iterator<Item = CheckKind> {
        self.outcomes.iter().filter(|o| !o.passed).map(|o| o.check)
    }

    /// Every assertion failure across all items.
    pub fn failures(&self) -> impl Iterator<Item = &AssertionFailure> {
        self.outcomes.iter().flat_map(|o| o.failures.iter())
    }
}
