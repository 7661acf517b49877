//! Flat form values and their `application/x-www-form-urlencoded` encoding.
//!
//! [`Values`] is a multimap from composite key to one or more scalar values,
//! kept sorted by key. [`Values::encode`] renders it as a form body:
//!
//! - ASCII alphanumerics and `-_.~` pass through
//! - space becomes `+`
//! - every other byte becomes `%XX` with uppercase hex digits
//! - pairs are joined as `key=value` with `&`, sorted by key and then by value
//!
//! ## Examples
//!
//! ```rust
//! use serde_form::Values;
//!
//! let mut values = Values::new();
//! values.add("b", "x y");
//! values.add("a.b", "1&2");
//! assert_eq!(values.encode(), "a.b=1%262&b=x+y");
//! ```


use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Bytes that must be percent-encoded in a form component.
const FORM_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A sorted multimap of composite keys to scalar values.
///
/// Values are raw bytes: text scalars are stored as UTF-8, byte sequences
/// that are not valid UTF-8 as they are.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Values(BTreeMap<String, Vec<Vec<u8>>>);

impl Values {
    #[must_use]
    pub fn new() -> Self {
        Values(BTreeMap::new())
    }

    /// Appends `value` to the values stored under `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// Replaces every value stored under `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.0.insert(key.into(), vec![value.into()]);
    }

    /// Returns the first value stored under `key`, if it is text.
    ///
    /// Use [`Values::get_bytes`] for values that may not be valid UTF-8.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_bytes(key)
            .and_then(|value| std::str::from_utf8(value).ok())
    }

    /// Returns the first value stored under `key`.
    #[must_use]
    pub fn get_bytes(&self, key: &str) -> Option<&[u8]> {
        self.0
            .get(key)
            .and_then(|values| values.first())
            .map(Vec::as_slice)
    }

    /// Returns every value stored under `key`, in insertion order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[Vec<u8>] {
        self.0.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in sorted order.
    pub fn keys(&self) -> btree_map::Keys<'_, String, Vec<Vec<u8>>> {
        self.0.keys()
    }

    /// Returns an iterator over keys and their values, in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<Vec<u8>>> {
        self.0.iter()
    }

    /// Encodes the values as an `application/x-www-form-urlencoded` string.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (key, values) in &self.0 {
            let mut sorted: Vec<&Vec<u8>> = values.iter().collect();
            sorted.sort();
            for value in sorted {
                if !out.is_empty() {
                    out.push('&');
                }
                encode_component(&mut out, key.as_bytes());
                out.push('=');
                encode_component(&mut out, value);
            }
        }
        out
    }
}

fn encode_component(out: &mut String, bytes: &[u8]) {
    for chunk in percent_encode(bytes, FORM_COMPONENT) {
        if chunk == "%20" {
            out.push('+');
        } else {
            out.push_str(chunk);
        }
    }
}

impl fmt::Display for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl<V: Into<Vec<u8>>> FromIterator<(String, V)> for Values {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        let mut values = Values::new();
        for (key, value) in iter {
            values.add(key, value);
        }
        values
    }
}

impl IntoIterator for Values {
    type Item = (String, Vec<Vec<u8>>);
    type IntoIter = btree_map::IntoIter<String, Vec<Vec<u8>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Values {
    type Item = (&'a String, &'a Vec<Vec<u8>>);
    type IntoIter = btree_map::Iter<'a, String, Vec<Vec<u8>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
