//! Vendor extension comparison.

use crate::diff::checks::{check_for_object_addition_or_removal, check_properties, PropertyCheck};
use crate::diff::{Change, Changed, PropertyChanges};
use crate::model::{Extensions, ValueReference};
use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::Value;

/// Changes to the `x-` extensions of one object.
///
/// Extensions never break a contract, so the breaking total is always 0.
#[derive(Debug, Clone, Serialize)]
pub struct ExtensionChanges {
    #[serde(flatten)]
    pub property_changes: PropertyChanges,
}

impl Changed for ExtensionChanges {
    fn total_changes(&self) -> usize {
        self.property_changes.total_changes()
    }

    fn total_breaking_changes(&self) -> usize {
        0
    }
}

fn lowercase_keys(extensions: &Extensions) -> IndexMap<String, &ValueReference<Value>> {
    extensions
        .iter()
        .map(|(k, v)| (k.value.to_lowercase(), v))
        .collect()
}

/// Compare two extension maps.
///
/// Keys match case-insensitively. Values are compared by their scalar text
/// only; a change inside an object-valued extension is not reported.
#[must_use]
pub fn compare_extensions(left: &Extensions, right: &Extensions) -> Option<ExtensionChanges> {
    let l = lowercase_keys(left);
    let r = lowercase_keys(right);
    let mut changes: Vec<Change> = Vec::new();

    for (key, lv) in &l {
        check_for_object_addition_or_removal(&l, &r, key, &mut changes, false, false);
        if let Some(rv) = r.get(key) {
            check_properties(
                &[PropertyCheck::new(key, Some(&lv.value_node), Some(&rv.value_node), false)],
                &mut changes,
            );
        }
    }
    for key in r.keys().filter(|k| !l.contains_key(*k)) {
        check_for_object_addition_or_removal(&l, &r, key, &mut changes, false, false);
    }

    if changes.is_empty() {
        return None;
    }
    Some(ExtensionChanges {
        property_changes: PropertyChanges::new(changes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::ChangeType;
    use crate::model::extract_extensions;
    use crate::parsers::parse_document_str;

    fn extensions(yaml: &str) -> Extensions {
        extract_extensions(&parse_document_str(yaml).unwrap())
    }

    #[test]
    fn test_identical_extensions() {
        let l = extensions("x-rate: 10\nx-owner: pets\n");
        let r = extensions("x-rate: 10\nx-owner: pets\n");
        assert!(compare_extensions(&l, &r).is_none());
    }

    #[test]
    fn test_keys_match_case_insensitively() {
        let l = extensions("X-Rate: 10\n");
        let r = extensions("x-rate: 10\n");
        assert!(compare_extensions(&l, &r).is_none());
    }

    #[test]
    fn test_added_removed_and_modified() {
        let l = extensions("x-rate: 10\nx-old: yes\n");
        let r = extensions("x-rate: 20\nx-new: yes\n");
        let report = compare_extensions(&l, &r).unwrap();

        assert_eq!(report.total_changes(), 3);
        assert_eq!(report.total_breaking_changes(), 0);
        let kinds: Vec<_> = report
            .property_changes
            .changes
            .iter()
            .map(|c| (c.property.as_str(), c.change_type))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("x-rate", ChangeType::Modified),
                ("x-old", ChangeType::ObjectRemoved),
                ("x-new", ChangeType::ObjectAdded),
            ]
        );
    }

    #[test]
    fn test_object_values_are_not_diffed() {
        let l = extensions("x-limits:\n  burst: 1\n");
        let r = extensions("x-limits:\n  burst: 2\n");
        assert!(compare_extensions(&l, &r).is_none());
    }
}
