//! Cookie Checker Core Library
//!
//! This library validates a batch of stored browser-session credentials
//! (Netscape-format cookie files) against a target web service, separating
//! files whose session is still authenticated from files whose session has
//! expired or is malformed.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`parser`] - Netscape cookie-file parsing into a name/value map
//! - [`checker`] - Per-file HTTP validation and batch orchestration
//!
//! The binary in `src/main.rs` is a thin CLI front end: it supplies the
//! directory to scan and a console sink that receives the report lines.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod checker;
pub mod parser;

// Re-export commonly used types
pub use checker::{
    BatchError, BatchSummary, CookieChecker, DEAD_DIR, DEFAULT_READ_TIMEOUT_SECS, FileOutcome,
    WORKS_DIR, is_authenticated_response,
};
pub use parser::{CookieMap, ParseError, cookie_header, parse_cookie_file};
