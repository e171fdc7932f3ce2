//! Operation, path item and paths comparison.

use super::extensions::{compare_extensions, ExtensionChanges};
use super::servers::{compare_servers, ServersChanges};
use super::tags::{compare_external_docs, ExternalDocChanges};
use crate::diff::checks::{
    check_object, check_properties, check_scalar_list, compare_keyed_objects,
    flatten_low_level_map, PropertyCheck,
};
use crate::diff::{Changed, PropertyChanges};
use crate::model::labels::{
    DEPRECATED_LABEL, DESCRIPTION_LABEL, EXTERNAL_DOCS_LABEL, OPERATION_ID_LABEL, SUMMARY_LABEL,
    TAGS_LABEL,
};
use crate::model::v3::{Operation, PathItem, Paths};
use indexmap::IndexMap;
use serde::Serialize;

/// Changes to one operation.
#[derive(Debug, Clone, Serialize)]
pub struct OperationChanges {
    #[serde(flatten)]
    pub property_changes: PropertyChanges,
    pub external_docs_changes: Option<ExternalDocChanges>,
    pub server_changes: Option<ServersChanges>,
    pub extension_changes: Option<ExtensionChanges>,
}

impl Changed for OperationChanges {
    fn total_changes(&self) -> usize {
        self.property_changes.total_changes()
            + self.external_docs_changes.total_changes()
            + self.server_changes.total_changes()
            + self.extension_changes.total_changes()
    }

    fn total_breaking_changes(&self) -> usize {
        self.property_changes.total_breaking_changes()
            + self.external_docs_changes.total_breaking_changes()
            + self.server_changes.total_breaking_changes()
    }
}

/// Compare two operations.
///
/// Only a changed `operationId` is breaking among the scalar fields; tag
/// changes are informational.
#[must_use]
pub fn compare_operations(left: &Operation, right: &Operation) -> Option<OperationChanges> {
    let mut changes = Vec::new();
    check_properties(
        &[
            PropertyCheck::fields(SUMMARY_LABEL, &left.summary, &right.summary, false),
            PropertyCheck::fields(DESCRIPTION_LABEL, &left.description, &right.description, false),
            PropertyCheck::fields(OPERATION_ID_LABEL, &left.operation_id, &right.operation_id, true),
            PropertyCheck::fields(DEPRECATED_LABEL, &left.deprecated, &right.deprecated, false),
        ],
        &mut changes,
    );
    check_scalar_list(
        TAGS_LABEL,
        left.tags.as_ref(),
        right.tags.as_ref(),
        &mut changes,
        false,
        false,
    );
    let external_docs_changes = check_object(
        EXTERNAL_DOCS_LABEL,
        left.external_docs.as_ref(),
        right.external_docs.as_ref(),
        &mut changes,
        false,
        false,
        compare_external_docs,
    );

    let report = OperationChanges {
        property_changes: PropertyChanges::new(changes),
        external_docs_changes,
        server_changes: compare_servers(left.servers.as_ref(), right.servers.as_ref()),
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    };
    (report.total_changes() > 0).then_some(report)
}

/// Changes to one path item.
#[derive(Debug, Clone, Serialize)]
pub struct PathItemChanges {
    #[serde(flatten)]
    pub property_changes: PropertyChanges,
    /// Operations present on both sides that changed, keyed by method.
    pub operation_changes: IndexMap<String, OperationChanges>,
    pub server_changes: Option<ServersChanges>,
    pub extension_changes: Option<ExtensionChanges>,
}

impl Changed for PathItemChanges {
    fn total_changes(&self) -> usize {
        self.property_changes.total_changes()
            + self.operation_changes.total_changes()
            + self.server_changes.total_changes()
            + self.extension_changes.total_changes()
    }

    fn total_breaking_changes(&self) -> usize {
        self.property_changes.total_breaking_changes()
            + self.operation_changes.total_breaking_changes()
            + self.server_changes.total_breaking_changes()
    }
}

/// Compare two path items.
///
/// Removing an operation is breaking; adding one is not.
#[must_use]
pub fn compare_path_items(left: &PathItem, right: &PathItem) -> Option<PathItemChanges> {
    let mut changes = Vec::new();
    check_properties(
        &[
            PropertyCheck::fields(SUMMARY_LABEL, &left.summary, &right.summary, false),
            PropertyCheck::fields(DESCRIPTION_LABEL, &left.description, &right.description, false),
        ],
        &mut changes,
    );

    let mut operation_changes = IndexMap::new();
    for ((method, l), (_, r)) in left.operation_slots().into_iter().zip(right.operation_slots()) {
        if let Some(report) =
            check_object(method, l, r, &mut changes, false, true, compare_operations)
        {
            operation_changes.insert(method.to_string(), report);
        }
    }

    let report = PathItemChanges {
        property_changes: PropertyChanges::new(changes),
        operation_changes,
        server_changes: compare_servers(left.servers.as_ref(), right.servers.as_ref()),
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    };
    (report.total_changes() > 0).then_some(report)
}

/// Changes to the `paths` object.
#[derive(Debug, Clone, Serialize)]
pub struct PathsChanges {
    /// Paths added or removed.
    #[serde(flatten)]
    pub property_changes: PropertyChanges,
    /// Paths present on both sides that changed, keyed by path.
    pub path_item_changes: IndexMap<String, PathItemChanges>,
    pub extension_changes: Option<ExtensionChanges>,
}

impl Changed for PathsChanges {
    fn total_changes(&self) -> usize {
        self.property_changes.total_changes()
            + self.path_item_changes.total_changes()
            + self.extension_changes.total_changes()
    }

    fn total_breaking_changes(&self) -> usize {
        self.property_changes.total_breaking_changes()
            + self.path_item_changes.total_breaking_changes()
    }
}

/// Compare two `paths` objects, matching path items by their exact path.
///
/// Removing a path is breaking; adding one is not.
#[must_use]
pub fn compare_paths(left: &Paths, right: &Paths) -> Option<PathsChanges> {
    let l = flatten_low_level_map(&left.path_items);
    let r = flatten_low_level_map(&right.path_items);
    let mut changes = Vec::new();
    let path_item_changes = compare_keyed_objects(&l, &r, &mut changes, false, true, compare_path_items);

    let report = PathsChanges {
        property_changes: PropertyChanges::new(changes),
        path_item_changes,
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    };
    (report.total_changes() > 0).then_some(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::changes::test_support::build_document;
    use crate::diff::ChangeType;

    fn paths(yaml: &str) -> Paths {
        let document = build_document(&format!("openapi: 3.1.0\npaths:\n{yaml}"));
        document.paths.map(|p| p.value).unwrap_or_default()
    }

    #[test]
    fn test_path_removed_is_breaking() {
        let left = paths("  /pets:\n    get:\n      summary: list\n  /users: {}\n");
        let right = paths("  /pets:\n    get:\n      summary: list\n  /stores: {}\n");
        let report = compare_paths(&left, &right).unwrap();

        assert_eq!(report.total_changes(), 2);
        assert_eq!(report.total_breaking_changes(), 1);
        let removed = report.property_changes.find("/users").unwrap();
        assert_eq!(removed.change_type, ChangeType::ObjectRemoved);
        assert!(removed.breaking);
    }

    #[test]
    fn test_operation_removed_and_added() {
        let left = paths("  /pets:\n    get:\n      summary: list\n");
        let right = paths("  /pets:\n    post:\n      summary: create\n");
        let report = compare_paths(&left, &right).unwrap();

        let pets = &report.path_item_changes["/pets"];
        assert!(pets.property_changes.find("get").unwrap().breaking);
        assert!(!pets.property_changes.find("post").unwrap().breaking);
        assert_eq!(report.total_breaking_changes(), 1);
    }

    #[test]
    fn test_operation_id_change_is_breaking() {
        let left = paths("  /pets:\n    get:\n      operationId: listPets\n      tags: [pets]\n");
        let right = paths("  /pets:\n    get:\n      operationId: getPets\n      tags: [pets, store]\n");
        let report = compare_paths(&left, &right).unwrap();

        let get = &report.path_item_changes["/pets"].operation_changes["get"];
        assert_eq!(get.total_changes(), 2);
        assert_eq!(get.total_breaking_changes(), 1);
        assert_eq!(report.total_breaking_changes(), 1);
    }

    #[test]
    fn test_referenced_path_items_compare_by_content() {
        let left = build_document(
            "openapi: 3.1.0\npaths:\n  /pets:\n    $ref: '#/components/pathItems/pets'\ncomponents:\n  pathItems:\n    pets:\n      get:\n        summary: list\n",
        );
        let right = build_document("openapi: 3.1.0\npaths:\n  /pets:\n    get:\n      summary: list\n");
        let (l, r) = (left.paths.unwrap().value, right.paths.unwrap().value);
        assert!(compare_paths(&l, &r).is_none());
    }
}
