//! Netscape cookie-file parsing.
//!
//! One `.txt` cookie file (as exported by browsers or browser extensions)
//! becomes a name/value map suitable for attaching to a validation request,
//! or a structured [`ParseError`] naming the file and the offending line.

mod cookies;
mod error;

pub use cookies::{CookieMap, cookie_header, parse_cookie_file, parse_cookie_reader};
pub use error::ParseError;
