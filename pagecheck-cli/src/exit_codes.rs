//! Stable exit codes for the `pagecheck` binary.

use pagecheck::LoadError;

/// Every checklist item passed.
pub const OK: i32 = 0;
/// The checklist ran and at least one item failed.
pub const FAILED: i32 = 1;
/// The run was aborted before any item ran (missing, unreadable or unparsable file).
pub const ABORTED: i32 = 2;
/// The checklist ran but its report could not be written.
pub const OUTPUT_ERROR: i32 = 3;

/// Exit code for an error returned by the CLI.
pub fn for_error(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<LoadError>().is_some() {
        ABORTED
    } else {
        OUTPUT_ERROR
    }
}
