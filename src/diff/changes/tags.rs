//! External documentation and tag comparison.

use super::extensions::{compare_extensions, ExtensionChanges};
use crate::diff::checks::{
    check_object, check_properties, compare_keyed_objects, key_list_by, PropertyCheck,
};
use crate::diff::{Change, Changed, PropertyChanges};
use crate::model::base::{ExternalDoc, Tag};
use crate::model::labels::{DESCRIPTION_LABEL, EXTERNAL_DOCS_LABEL, URL_LABEL};
use crate::model::{NodeReference, ValueReference};
use indexmap::IndexMap;
use serde::Serialize;

/// Changes to an External Documentation object.
#[derive(Debug, Clone, Serialize)]
pub struct ExternalDocChanges {
    #[serde(flatten)]
    pub property_changes: PropertyChanges,
    pub extension_changes: Option<ExtensionChanges>,
}

impl Changed for ExternalDocChanges {
    fn total_changes(&self) -> usize {
        self.property_changes.total_changes() + self.extension_changes.total_changes()
    }

    fn total_breaking_changes(&self) -> usize {
        self.property_changes.total_breaking_changes()
    }
}

#[must_use]
pub fn compare_external_docs(left: &ExternalDoc, right: &ExternalDoc) -> Option<ExternalDocChanges> {
    let mut changes = Vec::new();
    check_properties(
        &[
            PropertyCheck::fields(URL_LABEL, &left.url, &right.url, false),
            PropertyCheck::fields(DESCRIPTION_LABEL, &left.description, &right.description, false),
        ],
        &mut changes,
    );
    let report = ExternalDocChanges {
        property_changes: PropertyChanges::new(changes),
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    };
    (report.total_changes() > 0).then_some(report)
}

/// Changes to one tag, found by name on both sides.
#[derive(Debug, Clone, Serialize)]
pub struct TagChanges {
    #[serde(flatten)]
    pub property_changes: PropertyChanges,
    pub external_docs_changes: Option<ExternalDocChanges>,
    pub extension_changes: Option<ExtensionChanges>,
}

impl Changed for TagChanges {
    fn total_changes(&self) -> usize {
        self.property_changes.total_changes()
            + self.external_docs_changes.total_changes()
            + self.extension_changes.total_changes()
    }

    fn total_breaking_changes(&self) -> usize {
        self.property_changes.total_breaking_changes()
            + self.external_docs_changes.total_breaking_changes()
    }
}

/// Changes to a document's tag list.
#[derive(Debug, Clone, Serialize)]
pub struct TagsChanges {
    /// Tags added or removed, keyed by name.
    pub changes: Vec<Change>,
    /// Tags present on both sides that changed.
    pub tag_changes: IndexMap<String, TagChanges>,
}

impl Changed for TagsChanges {
    fn total_changes(&self) -> usize {
        self.changes.len() + self.tag_changes.total_changes()
    }

    fn total_breaking_changes(&self) -> usize {
        crate::diff::count_breaking_changes(&self.changes) + self.tag_changes.total_breaking_changes()
    }
}

fn compare_tag(left: &Tag, right: &Tag) -> Option<TagChanges> {
    let mut changes = Vec::new();
    check_properties(
        &[PropertyCheck::fields(DESCRIPTION_LABEL, &left.description, &right.description, false)],
        &mut changes,
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
    let report = TagChanges {
        property_changes: PropertyChanges::new(changes),
        external_docs_changes,
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    };
    (report.total_changes() > 0).then_some(report)
}

fn tag_name(tag: &Tag) -> String {
    tag.name.as_ref().map(|n| n.value.clone()).unwrap_or_default()
}

/// Compare two tag lists, matching tags by name.
///
/// Removing a tag is breaking, adding one is not.
#[must_use]
pub fn compare_tags(
    left: Option<&NodeReference<Vec<ValueReference<Tag>>>>,
    right: Option<&NodeReference<Vec<ValueReference<Tag>>>>,
) -> Option<TagsChanges> {
    let empty = Vec::new();
    let l = key_list_by(left.map_or(&empty, |t| &t.value), tag_name);
    let r = key_list_by(right.map_or(&empty, |t| &t.value), tag_name);

    let mut changes = Vec::new();
    let tag_changes = compare_keyed_objects(&l, &r, &mut changes, false, true, compare_tag);
    let report = TagsChanges {
        changes,
        tag_changes,
    };
    (report.total_changes() > 0).then_some(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::changes::test_support::{build_document, build_from_yaml};
    use crate::diff::ChangeType;
    use crate::model::v3::Document;

    fn tags(yaml: &str) -> Document {
        build_document(&format!("openapi: 3.1.0\n{yaml}"))
    }

    #[test]
    fn test_tag_removed_is_breaking() {
        let left = tags("tags:\n  - name: pets\n  - name: store\n");
        let right = tags("tags:\n  - name: pets\n  - name: users\n");
        let report = compare_tags(left.tags.as_ref(), right.tags.as_ref()).unwrap();

        assert_eq!(report.total_changes(), 2);
        assert_eq!(report.total_breaking_changes(), 1);
        assert_eq!(report.changes[0].change_type, ChangeType::ObjectRemoved);
        assert_eq!(report.changes[0].property, "store");
        assert_eq!(report.changes[1].change_type, ChangeType::ObjectAdded);
    }

    #[test]
    fn test_tag_description_and_docs() {
        let left = tags("tags:\n  - name: pets\n    description: old\n");
        let right = tags(
            "tags:\n  - name: pets\n    description: new\n    externalDocs:\n      url: https://docs.io\n",
        );
        let report = compare_tags(left.tags.as_ref(), right.tags.as_ref()).unwrap();

        let pets = &report.tag_changes["pets"];
        assert_eq!(pets.total_changes(), 2);
        assert_eq!(report.total_breaking_changes(), 0);
    }

    #[test]
    fn test_tag_order_does_not_matter() {
        let left = tags("tags:\n  - name: a\n  - name: b\n");
        let right = tags("tags:\n  - name: b\n  - name: a\n");
        assert!(compare_tags(left.tags.as_ref(), right.tags.as_ref()).is_none());
    }

    #[test]
    fn test_external_docs_url_change() {
        let left: ExternalDoc = build_from_yaml("url: https://a.io\n");
        let right: ExternalDoc = build_from_yaml("url: https://b.io\n");
        let report = compare_external_docs(&left, &right).unwrap();
        assert_eq!(report.total_changes(), 1);
        assert_eq!(report.total_breaking_changes(), 0);
    }
}
