//! Ordered map type for composite nodes.
//!
//! [`NodeMap`] wraps an [`IndexMap`] so that struct fields, map entries and
//! sequence elements keep the order in which the value produced them. The
//! wire form is sorted by key anyway; insertion order only makes tree
//! construction and flattening deterministic.
//!
//! ## Examples
//!
//! ```rust
//! use serde_form::{Node, NodeMap};
//!
//! let mut map = NodeMap::new();
//! map.insert("name".to_string(), Node::from("Alice"));
//! map.insert("age".to_string(), Node::from("30"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|n| n.as_str()), Some("Alice"));
//! ```

use crate::Node;
use indexmap::IndexMap;

/// An insertion-ordered map of key segments to child nodes.
///
/// Inserting an existing key replaces its node but keeps its original
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeMap(IndexMap<String, Node>);

impl NodeMap {
    /// Creates an empty `NodeMap`.
    #[must_use]
    pub fn new() -> Self {
        NodeMap(IndexMap::new())
    }

    /// Creates an empty `NodeMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NodeMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a node under `key`, returning the node it replaced.
    pub fn insert(&mut self, key: String, node: Node) -> Option<Node> {
        self.0.insert(key, node)
    }

    /// Removes `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Node> {
        self.0.keys()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.0.iter()
    }
}

impl IntoIterator for NodeMap {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeMap {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Node)> for NodeMap {
    fn from_iter<T: IntoIterator<Item = (String, Node)>>(iter: T) -> Self {
        NodeMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reinsert_keeps_position() {
        let mut map = NodeMap::new();
        map.insert("a".to_string(), Node::from("1"));
        map.insert("b".to_string(), Node::from("2"));
        let old = map.insert("a".to_string(), Node::from("3"));

        assert_eq!(old, Some(Node::from("1")));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&Node::from("3")));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut map: NodeMap = ["x", "y", "z"]
            .iter()
            .map(|k| (k.to_string(), Node::from(*k)))
            .collect();
        map.remove("y");

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["x", "z"]);
        assert!(!map.contains_key("y"));
    }
}
