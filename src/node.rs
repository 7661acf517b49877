//! The intermediate form tree.
//!
//! Every encoded value becomes a [`Node`]: either a scalar or a composite of
//! named children. Scalars are text, except for byte sequences that are not
//! valid UTF-8, which stay raw bytes so nothing is lost on the wire. Struct fields, map entries and sequence
//! elements all become composite entries keyed by a string (sequence indices
//! are stringified).
//!
//! A node tree is flattened into `(key, value)` pairs by joining the path to
//! each scalar with the delimiter:
//!
//! ```rust
//! use serde_form::{to_node, Options};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Inner { #[serde(rename = "B")] b: u8, #[serde(rename = "C")] c: Vec<u32> }
//!
//! #[derive(Serialize)]
//! struct Outer { #[serde(rename = "A")] a: Inner }
//!
//! let value = Outer { a: Inner { b: 1, c: vec![2, 3] } };
//! let node = to_node(&value, &Options::default()).unwrap();
//!
//! assert_eq!(
//!     node.flatten('.', '\\'),
//!     vec![
//!         ("A.B".to_string(), b"1".to_vec()),
//!         ("A.C.0".to_string(), b"2".to_vec()),
//!         ("A.C.1".to_string(), b"3".to_vec()),
//!     ]
//! );
//! ```

use crate::{key, NodeMap, Values};

/// A scalar leaf or a composite of named child nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Scalar(String),
    /// A byte sequence that is not valid UTF-8.
    Bytes(Vec<u8>),
    Composite(NodeMap),
}

impl Default for Node {
    fn default() -> Self {
        Node::empty()
    }
}

impl Node {
    /// The empty scalar, which is what zero values collapse to.
    #[must_use]
    pub fn empty() -> Self {
        Node::Scalar(String::new())
    }

    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_) | Node::Bytes(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Node::Composite(_))
    }

    /// If the node is a text scalar, returns its text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s),
            Node::Bytes(_) | Node::Composite(_) => None,
        }
    }

    /// If the node is a scalar, returns its raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Node::Scalar(s) => Some(s.as_bytes()),
            Node::Bytes(b) => Some(b),
            Node::Composite(_) => None,
        }
    }

    /// If the node is a composite, returns its entries.
    #[must_use]
    pub fn as_map(&self) -> Option<&NodeMap> {
        match self {
            Node::Composite(map) => Some(map),
            Node::Scalar(_) | Node::Bytes(_) => None,
        }
    }

    /// Returns the child stored under `key`, if this is a composite.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Flattens the tree into `(composite key, scalar)` pairs.
    ///
    /// Pairs come out depth-first in insertion order. A scalar root yields a
    /// single pair with the empty key. Composites without entries yield
    /// nothing at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_form::{Node, NodeMap};
    ///
    /// let mut inner = NodeMap::new();
    /// inner.insert("b.c".to_string(), Node::from("x"));
    /// let mut root = NodeMap::new();
    /// root.insert("a".to_string(), Node::Composite(inner));
    /// root.insert("empty".to_string(), Node::Composite(NodeMap::new()));
    ///
    /// let pairs = Node::Composite(root).flatten('.', '\\');
    /// assert_eq!(pairs, vec![("a.b\\.c".to_string(), b"x".to_vec())]);
    /// ```
    #[must_use]
    pub fn flatten(&self, delimiter: char, escape: char) -> Vec<(String, Vec<u8>)> {
        let mut pairs = Vec::new();
        self.flatten_into(&mut pairs, None, delimiter, escape);
        pairs
    }

    /// Flattens the tree into a sorted [`Values`] multimap.
    #[must_use]
    pub fn values(&self, delimiter: char, escape: char) -> Values {
        self.flatten(delimiter, escape).into_iter().collect()
    }

    fn flatten_into(
        &self,
        pairs: &mut Vec<(String, Vec<u8>)>,
        path: Option<&str>,
        delimiter: char,
        escape: char,
    ) {
        match self {
            Node::Scalar(_) | Node::Bytes(_) => {
                let value = self.as_bytes().unwrap_or_default().to_vec();
                pairs.push((path.unwrap_or_default().to_string(), value));
            }
            Node::Composite(map) => {
                for (segment, child) in map {
                    // An empty parent segment still needs its delimiter.
                    let mut child_path = match path {
                        Some(parent) => {
                            let mut p = String::with_capacity(parent.len() + segment.len() + 1);
                            p.push_str(parent);
                            p.push(delimiter);
                            p
                        }
                        None => String::with_capacity(segment.len()),
                    };
                    key::escape_into(&mut child_path, segment, delimiter, escape);
                    child.flatten_into(pairs, Some(&child_path), delimiter, escape);
                }
            }
        }
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(value.to_string())
    }
}

impl From<NodeMap> for Node {
    fn from(value: NodeMap) -> Self {
        Node::Composite(value)
    }
}
