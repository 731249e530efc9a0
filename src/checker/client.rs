//! Shared HTTP client construction policy for validation requests.
//!
//! Centralizes networking defaults so every validation request uses the same
//! timeouts, user agent, and compression settings.

use std::time::Duration;

use reqwest::Client;

use super::error::BatchError;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default per-request timeout when the caller does not override it.
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 30;

/// Browser-like User-Agent. The classification heuristic inspects the HTML a
/// logged-out browser would see, so the request must not advertise itself as
/// a tool and get a different page variant.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Builds the HTTP client shared by all validation requests in one run.
///
/// # Errors
///
/// Returns [`BatchError::ClientBuild`] when client construction fails.
pub(super) fn build_http_client(read_timeout: Duration) -> Result<Client, BatchError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(read_timeout)
        .user_agent(USER_AGENT)
        .gzip(true)
        .build()
        .map_err(|source| BatchError::ClientBuild { source })
}
