//! Configuration types for a checklist run.
//!
//! Split into source config (where the page comes from) and expectations
//! (the literals the checklist compares against). Both default to the
//! reference page so a bare run needs no configuration at all.

use std::path::PathBuf;

/// Default page location, relative to the working directory.
pub const DEFAULT_PAGE_PATH: &str = "index.html";

/// Where to read the page from and how much of it to accept.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct SourceConfig {
    /// Path of the HTML file to check (default: `index.html`).
    pub path: PathBuf,
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PAGE_PATH),
            max_file_size: 10_485_760,
        }
    }
}

impl SourceConfig {
    /// Source config for an explicit path with default limits.
    #[must_use]
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

/// Expected literal values compared by the content checks.
///
/// All comparisons against these values are exact; no trimming or case folding
/// is applied to element text.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Expectations {
    /// Value of the `charset` attribute on `meta[charset]`.
    pub charset: String,
    /// Fragment the viewport `content` must contain, also required verbatim in the raw text.
    pub viewport_width: String,
    /// Initial zoom marker required verbatim in the raw text.
    pub initial_scale: String,
    /// Exact text of the `<title>` element.
    pub title: String,
    /// Exact text of the first `<h1>` element.
    pub heading: String,
    /// Exact text of the first `<p>` element.
    pub paragraph: String,
    /// Value of the `lang` attribute on the root `<html>` element.
    pub lang: String,
}

impl Default for Expectations {
    fn default() -> Self {
        Self {
            charset: "UTF-8".to_owned(),
            viewport_width: "width=device-width".to_owned(),
            initial_scale: "initial-scale=1.0".to_owned(),
            title: "DevOps and CI CD".to_owned(),
            heading: "Automatic deployment to GitHub Pages".to_owned(),
            paragraph: "Simple HTML via CI/CD".to_owned(),
            lang: "en".to_owned(),
        }
    }
}
