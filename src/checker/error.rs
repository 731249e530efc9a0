//! Error types for batch validation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a batch run before any file is touched.
///
/// Per-file failures (parse errors, transport errors, move failures) are
/// never fatal to the batch; they are reported through the sink and the run
/// continues. Only the conditions below stop the run.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The input directory cannot be listed (missing, not a directory, or
    /// unreadable).
    #[error("cannot list cookie directory {path}: {source}")]
    ListDir {
        /// The directory that failed to list.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The target URL is not a valid URL.
    #[error("invalid target URL '{url}': {source}")]
    InvalidUrl {
        /// The rejected URL string.
        url: String,
        /// The underlying URL parse error.
        #[source]
        source: url::ParseError,
    },

    /// HTTP client construction failed.
    #[error("failed to construct HTTP client: {source}")]
    ClientBuild {
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
}
