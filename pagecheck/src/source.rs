//! Filesystem document source.
//!
//! Reads the page with a bounded streaming read: the size check and the read
//! are the same operation, so an oversized file is rejected without ever being
//! fully buffered.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::SourceConfig;
use crate::error::{LoadError, LoadErrorKind};

/// A file path and its raw text contents. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    path: PathBuf,
    text: String,
}

impl DocumentSource {
    /// Wrap text that was obtained elsewhere (e.g. already in memory).
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// The path the text was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The raw, unparsed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Read the configured page from disk.
///
/// # Errors
///
/// - [`LoadErrorKind::NotFound`] if the file does not exist.
/// - [`LoadErrorKind::Read`] if the path is not a regular file, an I/O error
///   occurs, the file exceeds `max_file_size`, the content is not valid UTF-8,
///   or the file is empty.
pub fn load(config: &SourceConfig) -> Result<DocumentSource, LoadError> {
    let path = config.path.as_path();

    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::new(
                path,
                LoadErrorKind::NotFound,
                "File does not exist",
            ));
        }
        Err(e) => {
            return Err(LoadError::new(
                path,
                LoadErrorKind::Read,
                format!("Failed to open file: {e}"),
            ));
        }
    };

    if path.is_dir() {
        return Err(LoadError::new(
            path,
            LoadErrorKind::Read,
            "Path is a directory, not a file",
        ));
    }

    // Read at most max_file_size + 1 bytes to detect oversized files
    let mut buffer = Vec::new();
    file.take(config.max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| {
            LoadError::new(path, LoadErrorKind::Read, format!("Failed to read file: {e}"))
        })?;

    if buffer.len() as u64 > config.max_file_size {
        return Err(LoadError::new(
            path,
            LoadErrorKind::Read,
            format!(
                "File exceeds maximum size of {} bytes",
                config.max_file_size
            ),
        ));
    }

    let text = String::from_utf8(buffer).map_err(|_| {
        LoadError::new(path, LoadErrorKind::Read, "File is not valid UTF-8")
    })?;

    if text.is_empty() {
        return Err(LoadError::new(path, LoadErrorKind::Read, "File is empty"));
    }

    debug!(file = %path.display(), bytes = text.len(), "loaded page");
    Ok(DocumentSource::new(path, text))
}
