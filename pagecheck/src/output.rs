//! Shared output formatting for checklist reports.
//!
//! Provides JSON and plain-text formatters for `ChecklistReport`.
//! Color/terminal formatting is left to the CLI layer.

use std::io::Write;

use crate::checks::CheckKind;
use crate::report::ChecklistReport;

const PASS_MARK: &str = "\u{2713}";
const FAIL_MARK: &str = "\u{2717}";

/// Format a `ChecklistReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ChecklistReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ChecklistReport` as human-readable plain text to a writer.
///
/// One line per checklist item, with that item's failures indented beneath it.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ChecklistReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  PAGE CONTENT CHECKLIST")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  File:     {}", report.file.display())?;
    writeln!(writer, "  Checks:   {}", report.outcomes.len())?;
    writeln!(writer, "  Passed:   {}", report.passed_count())?;
    writeln!(writer, "  Failed:   {}", report.failed_count())?;
    if report.parse_diagnostics > 0 {
        writeln!(
            writer,
            "  Parser recovered from {} markup error(s)",
            report.parse_diagnostics
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "{}", "-".repeat(80))?;
    for outcome in &report.outcomes {
        let mark = if outcome.passed { PASS_MARK } else { FAIL_MARK };
        writeln!(writer, "  {mark} {}", outcome.check)?;
        for failure in &outcome.failures {
            writeln!(writer, "      {}", failure.format_human_readable())?;
        }
    }
    writeln!(writer, "{}", "-".repeat(80))?;

    if report.ok {
        writeln!(
            writer,
            "{PASS_MARK} All {} checks passed",
            report.outcomes.len()
        )?;
    } else {
        let failed: Vec<&str> = report.failed_checks().map(CheckKind::as_str).collect();
        writeln!(
            writer,
            "{FAIL_MARK} {} of {} checks failed: {}",
            report.failed_count(),
            report.outcomes.len(),
            failed.join(", ")
        )?;
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}
