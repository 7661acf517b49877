//! Composite key escaping.
//!
//! A composite key is a list of path segments joined by a delimiter. Any
//! delimiter or escape character inside a segment is prefixed with the escape
//! character, so a key can always be split back into its original segments:
//!
//! ```rust
//! use serde_form::key::{escape, split};
//!
//! let segments = ["a.b", "c\\d", "e"];
//! let key = segments
//!     .iter()
//!     .map(|s| escape(s, '.', '\\'))
//!     .collect::<Vec<_>>()
//!     .join(".");
//!
//! assert_eq!(key, "a\\.b.c\\\\d.e");
//! assert_eq!(split(&key, '.', '\\'), segments);
//! ```

/// Escapes every delimiter and escape character in `segment`.
#[must_use]
pub fn escape(segment: &str, delimiter: char, escape: char) -> String {
    let mut out = String::with_capacity(segment.len());
    escape_into(&mut out, segment, delimiter, escape);
    out
}

/// Appends the escaped form of `segment` to `out`.
pub fn escape_into(out: &mut String, segment: &str, delimiter: char, escape: char) {
    for ch in segment.chars() {
        if ch == delimiter || ch == escape {
            out.push(escape);
        }
        out.push(ch);
    }
}

/// Reverses [`escape`] for a single segment.
///
/// A trailing escape character with nothing after it is kept as is.
#[must_use]
pub fn unescape(segment: &str, escape: char) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut chars = segment.chars();
    while let Some(ch) = chars.next() {
        if ch == escape {
            out.push(chars.next().unwrap_or(escape));
        } else {
            out.push(ch);
        }
    }
    out
}

/// Splits a composite key on unescaped delimiters and unescapes each segment.
///
/// Always returns at least one segment; the empty key is a single empty
/// segment.
#[must_use]
pub fn split(key: &str, delimiter: char, escape: char) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = key.chars();
    while let Some(ch) = chars.next() {
        if ch == escape {
            current.push(chars.next().unwrap_or(escape));
        } else if ch == delimiter {
            segments.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    segments.push(current);
    segments
}
