//! Building blocks shared by the comparators.

use super::result::{Change, ChangeType};
use crate::model::{Node, NodeReference, ReferenceMap, ValueReference};
use indexmap::IndexMap;
use std::sync::Arc;

/// One scalar property to compare.
///
/// Values are compared by the text of their nodes. A missing node, or one
/// that is not a scalar, counts as empty; objects held in a property are
/// therefore never compared this way.
#[derive(Debug, Clone, Copy)]
pub struct PropertyCheck<'a> {
    pub label: &'a str,
    pub left: Option<&'a Arc<Node>>,
    pub right: Option<&'a Arc<Node>>,
    pub breaking: bool,
}

impl<'a> PropertyCheck<'a> {
    #[must_use]
    pub const fn new(
        label: &'a str,
        left: Option<&'a Arc<Node>>,
        right: Option<&'a Arc<Node>>,
        breaking: bool,
    ) -> Self {
        Self {
            label,
            left,
            right,
            breaking,
        }
    }

    /// Compare the value nodes of two optional fields.
    #[must_use]
    pub fn fields<T>(
        label: &'a str,
        left: &'a Option<NodeReference<T>>,
        right: &'a Option<NodeReference<T>>,
        breaking: bool,
    ) -> Self {
        Self::new(
            label,
            crate::model::value_node(left),
            crate::model::value_node(right),
            breaking,
        )
    }
}

/// Text of a node for comparison: scalar text, or empty.
fn scalar_text(node: Option<&Arc<Node>>) -> &str {
    match node {
        Some(node) if node.target().is_scalar() => node.target().value.as_str(),
        _ => "",
    }
}

/// Run every check, appending a change for each property that differs.
///
/// Empty to non-empty is an addition, non-empty to empty a removal, and
/// two different non-empty texts a modification.
pub fn check_properties(checks: &[PropertyCheck<'_>], changes: &mut Vec<Change>) {
    for check in checks {
        let left = scalar_text(check.left);
        let right = scalar_text(check.right);
        let change_type = match (left.is_empty(), right.is_empty()) {
            (true, false) => ChangeType::PropertyAdded,
            (false, true) => ChangeType::PropertyRemoved,
            (false, false) if left != right => ChangeType::Modified,
            _ => continue,
        };
        changes.push(Change::new(
            change_type,
            check.label,
            check.left,
            check.right,
            check.breaking,
        ));
    }
}

/// Key a wrapped map by its key text.
#[must_use]
pub fn flatten_low_level_map<T>(map: &ReferenceMap<T>) -> IndexMap<String, &ValueReference<T>> {
    map.iter().map(|(k, v)| (k.value.clone(), v)).collect()
}

/// Key a list of wrapped objects by a derived name, first occurrence wins.
pub fn key_list_by<T>(
    items: &[ValueReference<T>],
    key: impl Fn(&T) -> String,
) -> IndexMap<String, &ValueReference<T>> {
    let mut keyed = IndexMap::new();
    for item in items {
        keyed.entry(key(&item.value)).or_insert(item);
    }
    keyed
}

/// Record `key` as removed if only `left` has it, or as added if only
/// `right` has it.
pub fn check_for_object_addition_or_removal<T>(
    left: &IndexMap<String, &ValueReference<T>>,
    right: &IndexMap<String, &ValueReference<T>>,
    key: &str,
    changes: &mut Vec<Change>,
    breaking_add: bool,
    breaking_remove: bool,
) {
    match (left.get(key), right.get(key)) {
        (Some(l), None) => changes.push(Change::new(
            ChangeType::ObjectRemoved,
            key,
            Some(&l.value_node),
            None,
            breaking_remove,
        )),
        (None, Some(r)) => changes.push(Change::new(
            ChangeType::ObjectAdded,
            key,
            None,
            Some(&r.value_node),
            breaking_add,
        )),
        _ => {}
    }
}

/// Compare two keyed collections of objects.
///
/// Keys on one side only become additions or removals; keys on both sides
/// are compared with `compare`, keeping the reports that found something.
/// Left keys come first, in left order, then right-only keys.
pub fn compare_keyed_objects<T, C>(
    left: &IndexMap<String, &ValueReference<T>>,
    right: &IndexMap<String, &ValueReference<T>>,
    changes: &mut Vec<Change>,
    breaking_add: bool,
    breaking_remove: bool,
    compare: impl Fn(&T, &T) -> Option<C>,
) -> IndexMap<String, C> {
    let mut nested = IndexMap::new();
    for key in left.keys() {
        check_for_object_addition_or_removal(left, right, key, changes, breaking_add, breaking_remove);
        if let (Some(l), Some(r)) = (left.get(key), right.get(key)) {
            if let Some(report) = compare(&l.value, &r.value) {
                nested.insert(key.clone(), report);
            }
        }
    }
    for key in right.keys().filter(|k| !left.contains_key(*k)) {
        check_for_object_addition_or_removal(left, right, key, changes, breaking_add, breaking_remove);
    }
    nested
}

/// Compare an optional object-valued field.
///
/// When both sides have it, `compare` recurses into it. When only one side
/// has it, a single addition or removal is recorded under `label`.
pub fn check_object<T, C>(
    label: &str,
    left: Option<&NodeReference<T>>,
    right: Option<&NodeReference<T>>,
    changes: &mut Vec<Change>,
    breaking_add: bool,
    breaking_remove: bool,
    compare: impl FnOnce(&T, &T) -> Option<C>,
) -> Option<C> {
    match (left, right) {
        (Some(l), Some(r)) => compare(&l.value, &r.value),
        (None, Some(r)) => {
            changes.push(Change::new(
                ChangeType::ObjectAdded,
                label,
                None,
                Some(&r.value_node),
                breaking_add,
            ));
            None
        }
        (Some(l), None) => {
            changes.push(Change::new(
                ChangeType::ObjectRemoved,
                label,
                Some(&l.value_node),
                None,
                breaking_remove,
            ));
            None
        }
        (None, None) => None,
    }
}

/// Compare two optional lists of scalars as sets of their texts.
pub fn check_scalar_list(
    label: &str,
    left: Option<&NodeReference<Vec<ValueReference<String>>>>,
    right: Option<&NodeReference<Vec<ValueReference<String>>>>,
    changes: &mut Vec<Change>,
    breaking_add: bool,
    breaking_remove: bool,
) {
    let empty = Vec::new();
    let l = key_list_by(left.map_or(&empty, |l| &l.value), Clone::clone);
    let r = key_list_by(right.map_or(&empty, |r| &r.value), Clone::clone);
    for (value, item) in &l {
        if !r.contains_key(value) {
            changes.push(Change::new(
                ChangeType::ObjectRemoved,
                label,
                Some(&item.value_node),
                None,
                breaking_remove,
            ));
        }
    }
    for (value, item) in &r {
        if !l.contains_key(value) {
            changes.push(Change::new(
                ChangeType::ObjectAdded,
                label,
                None,
                Some(&item.value_node),
                breaking_add,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::KeyReference;

    fn node(value: &str) -> Arc<Node> {
        Arc::new(Node::string(value, 1, 1))
    }

    #[test]
    fn test_check_properties_kinds() {
        let (a, b, empty) = (node("a"), node("b"), node(""));
        let mapping = Arc::new(Node::mapping(vec![node("k"), node("v")], 1, 1));
        let mut changes = Vec::new();
        check_properties(
            &[
                PropertyCheck::new("same", Some(&a), Some(&a), true),
                PropertyCheck::new("modified", Some(&a), Some(&b), true),
                PropertyCheck::new("added", None, Some(&b), false),
                PropertyCheck::new("added_from_empty", Some(&empty), Some(&b), false),
                PropertyCheck::new("removed", Some(&a), None, false),
                PropertyCheck::new("object", Some(&mapping), None, false),
                PropertyCheck::new("absent", None, None, true),
            ],
            &mut changes,
        );

        let kinds: Vec<_> = changes.iter().map(|c| (c.property.as_str(), c.change_type)).collect();
        assert_eq!(
            kinds,
            vec![
                ("modified", ChangeType::Modified),
                ("added", ChangeType::PropertyAdded),
                ("added_from_empty", ChangeType::PropertyAdded),
                ("removed", ChangeType::PropertyRemoved),
            ]
        );
        assert!(changes[0].breaking);
    }

    #[test]
    fn test_object_addition_or_removal() {
        let mut left_map: ReferenceMap<String> = ReferenceMap::new();
        left_map.insert(
            KeyReference::new("dog".to_string(), node("dog")),
            ValueReference::new("#/Dog".to_string(), node("#/Dog")),
        );
        let mut right_map = left_map.clone();
        right_map.insert(
            KeyReference::new("cat".to_string(), node("cat")),
            ValueReference::new("#/Cat".to_string(), node("#/Cat")),
        );
        let (l, r) = (flatten_low_level_map(&left_map), flatten_low_level_map(&right_map));

        let mut changes = Vec::new();
        check_for_object_addition_or_removal(&l, &r, "cat", &mut changes, false, true);
        check_for_object_addition_or_removal(&r, &l, "cat", &mut changes, false, true);
        check_for_object_addition_or_removal(&l, &r, "dog", &mut changes, false, true);

        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].change_type, ChangeType::ObjectAdded);
        assert!(!changes[0].breaking);
        assert_eq!(changes[1].change_type, ChangeType::ObjectRemoved);
        assert!(changes[1].breaking);
    }

    #[test]
    fn test_check_scalar_list() {
        let list = |values: &[&str]| {
            let items = values
                .iter()
                .map(|v| ValueReference::new((*v).to_string(), node(v)))
                .collect();
            NodeReference::new(items, node("tags"), node(""))
        };
        let (l, r) = (list(&["pets", "store"]), list(&["store", "users"]));
        let mut changes = Vec::new();
        check_scalar_list("tags", Some(&l), Some(&r), &mut changes, false, true);

        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].original, Some(serde_yaml::Value::from("pets")));
        assert_eq!(changes[1].new, Some(serde_yaml::Value::from("users")));
    }
}
