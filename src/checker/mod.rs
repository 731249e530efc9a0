//! Batch validation of cookie files against the target service.
//!
//! [`CookieChecker`] owns the HTTP client and the target URL for one run. It
//! enumerates `.txt` files directly under a directory, parses each one,
//! issues a single GET with the cookies attached, and sorts the file into
//! `works/` or `dead_cookies/` based on the response. Progress is reported
//! as plain text lines through a caller-supplied sink.

mod client;
mod error;

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::COOKIE;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::parser::{CookieMap, ParseError, cookie_header, parse_cookie_file};

pub use client::DEFAULT_READ_TIMEOUT_SECS;
pub use error::BatchError;

/// Marker text rendered on the target service's logged-out pages. An
/// authenticated session's landing page does not contain it.
const LOGIN_PROMPT_MARKER: &str = "Sign in";

/// Subdirectory receiving files whose session is still authenticated.
pub const WORKS_DIR: &str = "works";

/// Subdirectory receiving files whose session is dead.
pub const DEAD_DIR: &str = "dead_cookies";

const SUMMARY_SEPARATOR_LEN: usize = 50;

/// Returns `true` when the response body indicates an authenticated session.
///
/// This is a heuristic substring check against the login prompt, not a
/// status-code check; it is isolated here so it can be swapped for a
/// redirect- or status-based check without touching the orchestration.
#[must_use]
pub fn is_authenticated_response(body: &str) -> bool {
    !body.contains(LOGIN_PROMPT_MARKER)
}

/// Terminal classification of one cookie file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The session is still authenticated; the file moves to `works/`.
    Working,
    /// The session is expired or invalid; the file moves to `dead_cookies/`.
    Dead,
    /// The file could not be parsed; it stays in place.
    Unparseable(ParseError),
    /// The validation request failed at the transport level (DNS, connect,
    /// timeout); the file stays in place pending a later run.
    TransportFailed(reqwest::Error),
}

/// Counters for one completed batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of `.txt` files considered.
    pub total_checked: usize,
    /// Number of files classified as working.
    pub working: usize,
}

/// Validates a directory of Netscape cookie files against one target URL.
#[derive(Debug)]
pub struct CookieChecker {
    client: Client,
    target_url: Url,
}

impl CookieChecker {
    /// Creates a checker for the given target URL and per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::InvalidUrl`] for an unparseable URL and
    /// [`BatchError::ClientBuild`] when HTTP client construction fails.
    pub fn new(target_url: &str, read_timeout: Duration) -> Result<Self, BatchError> {
        let target_url = Url::parse(target_url).map_err(|source| BatchError::InvalidUrl {
            url: target_url.to_string(),
            source,
        })?;
        let client = client::build_http_client(read_timeout)?;
        Ok(Self { client, target_url })
    }

    /// Creates a checker with the default per-request timeout.
    ///
    /// # Errors
    ///
    /// Same contract as [`CookieChecker::new`].
    pub fn with_default_timeout(target_url: &str) -> Result<Self, BatchError> {
        Self::new(
            target_url,
            Duration::from_secs(client::DEFAULT_READ_TIMEOUT_SECS),
        )
    }

    /// Parses one cookie file and validates it with a single GET request.
    #[instrument(level = "debug", skip(self))]
    pub async fn check_file(&self, path: &Path) -> FileOutcome {
        match parse_cookie_file(path) {
            Ok(cookies) => self.check_cookies(&cookies).await,
            Err(err) => FileOutcome::Unparseable(err),
        }
    }

    /// Issues the validation request with the parsed cookies attached.
    async fn check_cookies(&self, cookies: &CookieMap) -> FileOutcome {
        let request = self
            .client
            .get(self.target_url.clone())
            .header(COOKIE, cookie_header(cookies));

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return FileOutcome::TransportFailed(err),
        };
        debug!(status = %response.status(), "validation response received");

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return FileOutcome::TransportFailed(err),
        };

        if is_authenticated_response(&body) {
            FileOutcome::Working
        } else {
            FileOutcome::Dead
        }
    }

    /// Runs the batch over every `.txt` file directly under `directory`.
    ///
    /// Files are processed strictly sequentially; each file's request
    /// completes before the next file is touched. Per-file failures are
    /// reported through `sink` and never abort the batch. The sink always
    /// receives three final lines: a separator, the total count, and the
    /// working count.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::ListDir`] when the directory cannot be listed;
    /// this aborts before any file I/O.
    pub async fn run<F>(&self, directory: &Path, sink: &mut F) -> Result<BatchSummary, BatchError>
    where
        F: FnMut(&str),
    {
        let names = list_cookie_files(directory)?;
        info!(
            directory = %directory.display(),
            candidates = names.len(),
            target = %self.target_url,
            "starting batch validation"
        );

        // Both sort directories exist after every run, even one that moves
        // nothing. A creation failure here is not fatal: the per-file moves
        // will fail and be surfaced individually.
        for subdir in [WORKS_DIR, DEAD_DIR] {
            if let Err(err) = fs::create_dir_all(directory.join(subdir)) {
                warn!(subdir, error = %err, "failed to create sort directory");
            }
        }

        let mut summary = BatchSummary::default();

        for name in names {
            let file_name = name.to_string_lossy().into_owned();
            let path = directory.join(&name);
            summary.total_checked += 1;

            match self.check_file(&path).await {
                FileOutcome::Working => {
                    summary.working += 1;
                    sink(&format!("Cookie in file {file_name} is working."));
                    if let Err(err) = relocate(&path, directory, WORKS_DIR) {
                        warn!(file = %file_name, error = %err, "failed to move working cookie file");
                        sink(&format!("Failed to move {file_name} into {WORKS_DIR}/: {err}"));
                    }
                }
                FileOutcome::Dead => {
                    // Silent classification: dead files move without a report line.
                    debug!(file = %file_name, "session dead");
                    if let Err(err) = relocate(&path, directory, DEAD_DIR) {
                        warn!(file = %file_name, error = %err, "failed to move dead cookie file");
                        sink(&format!("Failed to move {file_name} into {DEAD_DIR}/: {err}"));
                    }
                }
                FileOutcome::Unparseable(err) => {
                    warn!(file = %file_name, error = %err, "cookie file failed to parse");
                    sink(&err.to_string());
                }
                FileOutcome::TransportFailed(err) => {
                    warn!(file = %file_name, error = %err, "validation request failed");
                    sink(&format!(
                        "Request failed for {file_name}: {err}; leaving file in place"
                    ));
                }
            }
        }

        sink(&"=".repeat(SUMMARY_SEPARATOR_LEN));
        sink(&format!(
            "Total cookies file checked: {}",
            summary.total_checked
        ));
        sink(&format!("Only {} file working", summary.working));

        info!(
            total = summary.total_checked,
            working = summary.working,
            "batch validation complete"
        );
        Ok(summary)
    }
}

/// Lists `.txt` regular files directly under `directory`, sorted by name.
///
/// The walk is non-recursive: files already sorted into `works/` or
/// `dead_cookies/` are never revisited.
fn list_cookie_files(directory: &Path) -> Result<Vec<OsString>, BatchError> {
    let entries = fs::read_dir(directory).map_err(|source| BatchError::ListDir {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BatchError::ListDir {
            path: directory.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_ok_and(|t| t.is_file()) {
            continue;
        }
        let name = entry.file_name();
        if name.to_string_lossy().ends_with(".txt") {
            names.push(name);
        }
    }

    // Deterministic processing and report order
    names.sort();
    Ok(names)
}

/// Moves `path` into `<directory>/<subdir>/`, creating the subdirectory if
/// absent. Creation is create-if-absent and repeat-safe across runs.
fn relocate(path: &Path, directory: &Path, subdir: &str) -> io::Result<()> {
    let target_dir = directory.join(subdir);
    fs::create_dir_all(&target_dir)?;
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    fs::rename(path, target_dir.join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_is_authenticated_response_without_marker() {
        assert!(is_authenticated_response("<html>Welcome back</html>"));
    }

    #[test]
    fn test_is_authenticated_response_with_login_prompt() {
        assert!(!is_authenticated_response("<html>Sign in to continue</html>"));
        assert!(!is_authenticated_response("Sign in"));
    }

    #[test]
    fn test_is_authenticated_response_is_case_sensitive() {
        // The heuristic matches the literal prompt text, nothing looser.
        assert!(is_authenticated_response("sign in"));
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let err = CookieChecker::new("not a url", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, BatchError::InvalidUrl { .. }));
    }

    #[test]
    fn test_with_default_timeout_accepts_valid_url() {
        assert!(CookieChecker::with_default_timeout("https://example.com").is_ok());
    }

    #[test]
    fn test_list_cookie_files_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("notes.md"), "").unwrap();
        // A directory with a .txt name must not be listed
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let names = list_cookie_files(dir.path()).unwrap();
        assert_eq!(names, vec![OsString::from("a.txt"), OsString::from("b.txt")]);
    }

    #[test]
    fn test_list_cookie_files_missing_directory_errors() {
        let err = list_cookie_files(Path::new("/nonexistent/cookie/dir")).unwrap_err();
        assert!(matches!(err, BatchError::ListDir { .. }));
    }

    #[test]
    fn test_relocate_creates_subdir_and_moves() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "data").unwrap();

        relocate(&file, dir.path(), WORKS_DIR).unwrap();

        assert!(!file.exists());
        let moved = dir.path().join(WORKS_DIR).join("a.txt");
        assert_eq!(fs::read_to_string(moved).unwrap(), "data");
    }

    #[test]
    fn test_relocate_is_repeat_safe_on_existing_subdir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(DEAD_DIR)).unwrap();
        let file = dir.path().join("b.txt");
        fs::write(&file, "").unwrap();

        relocate(&file, dir.path(), DEAD_DIR).unwrap();
        assert!(dir.path().join(DEAD_DIR).join("b.txt").exists());
    }
}
