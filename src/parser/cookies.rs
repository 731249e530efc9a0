//! Netscape cookie file parser.
//!
//! Parses the Netscape HTTP cookie file format (7 whitespace-separated fields
//! per line: `domain flag path secure expiration name value`) into a
//! name/value map. Only the last two fields matter for validation; the rest
//! are accepted and discarded.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument};

use super::error::ParseError;

/// Name → value mapping parsed from one cookie file.
///
/// Keys are unique within a file; a later line repeating a name overwrites
/// the earlier value (map semantics, not an error). Values are sensitive —
/// never log them.
pub type CookieMap = HashMap<String, String>;

/// A well-formed Netscape cookie line has exactly this many fields.
const NETSCAPE_FIELD_COUNT: usize = 7;
/// Field index of the cookie name.
const NAME_FIELD: usize = 5;
/// Field index of the cookie value.
const VALUE_FIELD: usize = 6;

/// Parses a Netscape-format cookie file into a [`CookieMap`].
///
/// # Errors
///
/// Returns [`ParseError::Io`] when the file cannot be opened or read, and
/// [`ParseError::MissingValue`] / [`ParseError::MalformedLine`] on the first
/// line with fewer than 7 fields. No partial map is ever returned.
#[instrument(level = "debug")]
pub fn parse_cookie_file(path: &Path) -> Result<CookieMap, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::io(path, source))?;
    parse_cookie_reader(BufReader::new(file), path)
}

/// Parses Netscape-format cookie lines from a buffered reader.
///
/// Blank lines and lines whose first non-whitespace character is `#`
/// (comments, including the optional `# Netscape HTTP Cookie File` header)
/// are skipped. Every other line must carry at least 7 whitespace-separated
/// fields; parsing stops at the first line that does not.
///
/// # Errors
///
/// Same contract as [`parse_cookie_file`]; `path` is only used to name the
/// file in errors.
pub fn parse_cookie_reader(reader: impl BufRead, path: &Path) -> Result<CookieMap, ParseError> {
    let mut cookies = CookieMap::new();

    for (idx, line_result) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = line_result.map_err(|source| ParseError::io(path, source))?;
        // Handle CRLF: strip trailing \r
        let line = line.trim_end();

        if line.is_empty() {
            continue;
        }
        if line.trim_start().starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < NETSCAPE_FIELD_COUNT {
            // Fail the whole file at the first short line; when the name
            // field is still present the error can say which cookie lacks
            // a value.
            return Err(match fields.get(NAME_FIELD) {
                Some(name) => ParseError::MissingValue {
                    path: path.to_path_buf(),
                    line_number,
                    name: (*name).to_string(),
                },
                None => ParseError::MalformedLine {
                    path: path.to_path_buf(),
                    line_number,
                    found: fields.len(),
                },
            });
        }

        // Value intentionally not logged.
        debug!(line = line_number, name = fields[NAME_FIELD], "parsed cookie");
        cookies.insert(
            fields[NAME_FIELD].to_string(),
            fields[VALUE_FIELD].to_string(),
        );
    }

    Ok(cookies)
}

/// Renders a [`CookieMap`] as a `Cookie` request-header value
/// (`name1=value1; name2=value2`).
///
/// Pair order is unspecified; HTTP cookie semantics do not depend on it.
#[must_use]
pub fn cookie_header(cookies: &CookieMap) -> String {
    cookies
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ")
}
