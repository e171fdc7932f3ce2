//! Reference wrappers: decoded values that remember their source nodes.

use super::Node;
use indexmap::IndexMap;
use serde_yaml::Value;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A decoded mapping key plus the node it came from.
///
/// Equality and hashing use the decoded value only, so two keys parsed
/// from different places in a document compare equal when their text does.
#[derive(Debug, Clone)]
pub struct KeyReference<T> {
    pub value: T,
    pub key_node: Arc<Node>,
}

impl<T> KeyReference<T> {
    pub fn new(value: T, key_node: Arc<Node>) -> Self {
        Self { value, key_node }
    }
}

impl<T: PartialEq> PartialEq for KeyReference<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for KeyReference<T> {}

impl<T: Hash> Hash for KeyReference<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// A decoded value plus the node it came from.
#[derive(Debug, Clone)]
pub struct ValueReference<T> {
    pub value: T,
    pub value_node: Arc<Node>,
}

impl<T> ValueReference<T> {
    pub fn new(value: T, value_node: Arc<Node>) -> Self {
        Self { value, value_node }
    }

    /// Line of the value in the source document.
    #[must_use]
    pub fn line(&self) -> usize {
        self.value_node.line
    }

    /// Column of the value in the source document.
    #[must_use]
    pub fn column(&self) -> usize {
        self.value_node.column
    }
}

impl<T: PartialEq> PartialEq for ValueReference<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// A decoded value with both its key and value nodes.
///
/// Used for object fields, where reporting wants the position of the
/// field name as well as the position of its value.
#[derive(Debug, Clone)]
pub struct NodeReference<T> {
    pub value: T,
    pub key_node: Arc<Node>,
    pub value_node: Arc<Node>,
}

impl<T> NodeReference<T> {
    pub fn new(value: T, key_node: Arc<Node>, value_node: Arc<Node>) -> Self {
        Self {
            value,
            key_node,
            value_node,
        }
    }

    /// Line of the value in the source document.
    #[must_use]
    pub fn line(&self) -> usize {
        self.value_node.line
    }

    /// Column of the value in the source document.
    #[must_use]
    pub fn column(&self) -> usize {
        self.value_node.column
    }
}

/// Map of wrapped keys to wrapped values, in source order.
pub type ReferenceMap<T> = IndexMap<KeyReference<String>, ValueReference<T>>;

/// Vendor extensions attached to an object.
pub type Extensions = ReferenceMap<Value>;

/// Value node of an optional field, for change reporting.
pub(crate) fn value_node<T>(field: &Option<NodeReference<T>>) -> Option<&Arc<Node>> {
    field.as_ref().map(|f| &f.value_node)
}

/// Find an item in a wrapped map by key text.
///
/// Exact matches win; otherwise the first case-insensitive match is
/// returned. A miss is `None`, never an error.
#[must_use]
pub fn find_item_in_map<'a, T>(item: &str, map: &'a ReferenceMap<T>) -> Option<&'a ValueReference<T>> {
    map.iter()
        .find(|(key, _)| key.value == item)
        .or_else(|| map.iter().find(|(key, _)| key.value.eq_ignore_ascii_case(item)))
        .map(|(_, value)| value)
}

/// Objects that carry vendor extensions.
pub trait HasExtensions {
    fn extensions(&self) -> &Extensions;

    /// Look up an extension by name.
    fn find_extension(&self, name: &str) -> Option<&ValueReference<Value>> {
        find_item_in_map(name, self.extensions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(value: &str, line: usize) -> Arc<Node> {
        Arc::new(Node::string(value, line, 1))
    }

    #[test]
    fn test_key_equality_ignores_nodes() {
        let a = KeyReference::new("x-a".to_string(), scalar("x-a", 1));
        let b = KeyReference::new("x-a".to_string(), scalar("x-a", 40));
        assert_eq!(a, b);

        let mut map: ReferenceMap<i64> = IndexMap::new();
        map.insert(a, ValueReference::new(1, scalar("1", 1)));
        map.insert(b, ValueReference::new(2, scalar("2", 40)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_find_item_prefers_exact_match() {
        let mut map: ReferenceMap<&str> = IndexMap::new();
        map.insert(
            KeyReference::new("X-Rate".to_string(), scalar("X-Rate", 1)),
            ValueReference::new("upper", scalar("upper", 1)),
        );
        map.insert(
            KeyReference::new("x-rate".to_string(), scalar("x-rate", 2)),
            ValueReference::new("lower", scalar("lower", 2)),
        );
        assert_eq!(find_item_in_map("x-rate", &map).map(|v| v.value), Some("lower"));
        assert_eq!(find_item_in_map("X-RATE", &map).map(|v| v.value), Some("upper"));
        assert!(find_item_in_map("x-missing", &map).is_none());
    }
}
