//! Error types for cookie-file parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while parsing a Netscape cookie file.
///
/// A file either yields a complete cookie map or one of these errors — the
/// parser never returns a partially populated map. Cookie values never appear
/// in error messages.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A cookie line carried a name but no value field.
    #[error("no value given for {name} in cookie file {path}")]
    MissingValue {
        /// The cookie file being parsed.
        path: PathBuf,
        /// 1-based line number of the offending line.
        line_number: usize,
        /// The cookie name that has no value.
        name: String,
    },

    /// A cookie line had too few fields to recover even the cookie name.
    #[error("error parsing {path}: line {line_number}: expected 7 whitespace-separated fields, found {found}")]
    MalformedLine {
        /// The cookie file being parsed.
        path: PathBuf,
        /// 1-based line number of the offending line.
        line_number: usize,
        /// Number of fields actually present on the line.
        found: usize,
    },

    /// I/O error reading the cookie file.
    #[error("error parsing {path}: {source}")]
    Io {
        /// The cookie file being parsed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Creates an I/O parse error for the given file.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
