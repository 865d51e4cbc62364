//! Include-directive extraction for xcconfig files.
//!
//! Parsing is deliberately line-local: any line containing the marker is an
//! include directive, comments included.
use crate::errors::ParseError;

/// Default directive marker.
pub const INCLUDE_MARKER: &str = "#include";

/// Parse one line and return the raw relative include path, if the line is a directive.
///
/// Both `#include "a.xcconfig"` and the optional form `#include? "a.xcconfig"`
/// (with or without a space before `?`) yield `a.xcconfig`. Only the text
/// between the first marker and the next one (or the end of the line) is
/// considered; the path is what follows its first `"`, up to the next `"`.
///
/// # Errors
/// Returns `ParseError::MissingQuotedPath` when the line contains `marker` but
/// no double quote follows it.
pub fn parse_include_line<'a>(line: &'a str, marker: &str) -> Result<Option<&'a str>, ParseError> {
    let mut segments = line.split(marker);
    segments.next();
    let Some(segment) = segments.next() else {
        return Ok(None);
    };
    let rest = segment.trim_matches('?').trim();
    let mut parts = rest.split('"');
    parts.next();
    match parts.next() {
        Some(path) => Ok(Some(path.trim())),
        None => Err(ParseError::MissingQuotedPath { line: line.to_string() }),
    }
}

/// Extract every include path from `content`, paired with its 1-based line number.
///
/// # Errors
/// Stops at the first malformed directive and returns its line number with the error.
pub fn parse_includes<'a>(
    content: &'a str,
    marker: &str,
) -> Result<Vec<(usize, &'a str)>, (usize, ParseError)> {
    let mut out = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim_end();
        match parse_include_line(line, marker) {
            Ok(Some(path)) => out.push((idx + 1, path)),
            Ok(None) => {}
            Err(e) => return Err((idx + 1, e)),
        }
    }
    Ok(out)
}
