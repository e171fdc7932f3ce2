//! Whole-document comparison for OpenAPI 3.x.

use super::extensions::{compare_extensions, ExtensionChanges};
use super::info::{compare_info, InfoChanges};
use super::paths::{compare_path_items, compare_paths, PathItemChanges, PathsChanges};
use super::servers::{compare_servers, ServersChanges};
use super::tags::{compare_external_docs, compare_tags, ExternalDocChanges, TagsChanges};
use crate::diff::checks::{
    check_object, check_properties, compare_keyed_objects, flatten_low_level_map, PropertyCheck,
};
use crate::diff::{Changed, PropertyChanges};
use crate::model::labels::{
    EXTERNAL_DOCS_LABEL, INFO_LABEL, JSON_SCHEMA_DIALECT_LABEL, OPENAPI_LABEL, PATHS_LABEL,
};
use crate::model::v3::Document;
use crate::model::ReferenceMap;
use indexmap::IndexMap;
use serde::Serialize;

/// Every change between two documents.
///
/// The root of the report tree: ask it for [`Changed::total_changes`] and
/// [`Changed::total_breaking_changes`], or walk the nested reports.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentChanges {
    #[serde(flatten)]
    pub property_changes: PropertyChanges,
    pub info_changes: Option<InfoChanges>,
    pub server_changes: Option<ServersChanges>,
    pub paths_changes: Option<PathsChanges>,
    /// Webhooks present on both sides that changed, keyed by name.
    pub webhook_changes: IndexMap<String, PathItemChanges>,
    pub tag_changes: Option<TagsChanges>,
    pub external_docs_changes: Option<ExternalDocChanges>,
    pub extension_changes: Option<ExtensionChanges>,
}

impl Changed for DocumentChanges {
    fn total_changes(&self) -> usize {
        self.property_changes.total_changes()
            + self.info_changes.total_changes()
            + self.server_changes.total_changes()
            + self.paths_changes.total_changes()
            + self.webhook_changes.total_changes()
            + self.tag_changes.total_changes()
            + self.external_docs_changes.total_changes()
            + self.extension_changes.total_changes()
    }

    fn total_breaking_changes(&self) -> usize {
        self.property_changes.total_breaking_changes()
            + self.info_changes.total_breaking_changes()
            + self.server_changes.total_breaking_changes()
            + self.paths_changes.total_breaking_changes()
            + self.webhook_changes.total_breaking_changes()
            + self.tag_changes.total_breaking_changes()
            + self.external_docs_changes.total_breaking_changes()
    }
}

/// Compare two built OpenAPI 3.x documents.
///
/// Returns `None` when the documents are semantically identical. A changed
/// `openapi` version or `jsonSchemaDialect` is breaking, as is removing a
/// path, an operation or a webhook.
#[must_use]
pub fn compare_documents(left: &Document, right: &Document) -> Option<DocumentChanges> {
    let mut changes = Vec::new();
    check_properties(
        &[
            PropertyCheck::fields(OPENAPI_LABEL, &left.version, &right.version, true),
            PropertyCheck::fields(
                JSON_SCHEMA_DIALECT_LABEL,
                &left.json_schema_dialect,
                &right.json_schema_dialect,
                true,
            ),
        ],
        &mut changes,
    );

    let info_changes = check_object(
        INFO_LABEL,
        left.info.as_ref(),
        right.info.as_ref(),
        &mut changes,
        false,
        false,
        compare_info,
    );
    let paths_changes = check_object(
        PATHS_LABEL,
        left.paths.as_ref(),
        right.paths.as_ref(),
        &mut changes,
        false,
        true,
        compare_paths,
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

    let empty = ReferenceMap::new();
    let l = flatten_low_level_map(left.webhooks.as_ref().map_or(&empty, |w| &w.value));
    let r = flatten_low_level_map(right.webhooks.as_ref().map_or(&empty, |w| &w.value));
    let webhook_changes = compare_keyed_objects(&l, &r, &mut changes, false, true, compare_path_items);

    let report = DocumentChanges {
        property_changes: PropertyChanges::new(changes),
        info_changes,
        server_changes: compare_servers(left.servers.as_ref(), right.servers.as_ref()),
        paths_changes,
        webhook_changes,
        tag_changes: compare_tags(left.tags.as_ref(), right.tags.as_ref()),
        external_docs_changes,
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    };

    let (total, breaking) = (report.total_changes(), report.total_breaking_changes());
    tracing::debug!("Document comparison found {total} changes ({breaking} breaking)");
    (total > 0).then_some(report)
}
