use super::{Components, Paths, PathItem, SecurityRequirement, Server};
use crate::config::BuildConfig;
use crate::error::{ErrorContext, OasError, Result};
use crate::index::SpecIndex;
use crate::model::base::{ExternalDoc, Info, Tag};
use crate::model::labels::{
    COMPONENTS_LABEL, EXTERNAL_DOCS_LABEL, INFO_LABEL, JSON_SCHEMA_DIALECT_LABEL, OPENAPI_LABEL,
    PATHS_LABEL, SECURITY_LABEL, SERVERS_LABEL, TAGS_LABEL, WEBHOOKS_LABEL, WEBHOOK_LABEL,
};
use crate::model::{
    build_collection, extract_array, extract_extensions, extract_field, extract_object,
    resolve_alias, Extensions, HasExtensions, Node, NodeReference, ReferenceMap, ValueReference,
};
use std::sync::Arc;

/// Root of an OpenAPI 3.x document.
#[derive(Debug, Clone)]
pub struct Document {
    /// The `openapi` version string.
    pub version: Option<NodeReference<String>>,
    pub info: Option<NodeReference<Info>>,
    /// Default `$schema` dialect (3.1).
    pub json_schema_dialect: Option<NodeReference<String>>,
    pub servers: Option<NodeReference<Vec<ValueReference<Server>>>>,
    pub paths: Option<NodeReference<Paths>>,
    /// Incoming webhooks (3.1), built like path items.
    pub webhooks: Option<NodeReference<ReferenceMap<PathItem>>>,
    pub components: Option<NodeReference<Components>>,
    pub security: Option<NodeReference<Vec<ValueReference<SecurityRequirement>>>>,
    pub tags: Option<NodeReference<Vec<ValueReference<Tag>>>>,
    pub external_docs: Option<NodeReference<ExternalDoc>>,
    pub extensions: Extensions,
    /// The index the document was built against.
    pub index: Arc<SpecIndex>,
}

impl Document {
    /// Index `root` with `config` and build the document from it.
    pub fn build_from_root(root: Arc<Node>, config: &BuildConfig) -> Result<Self> {
        let index = Arc::new(SpecIndex::new(root, config));
        Self::build_with_index(index)
    }

    /// Build the document from an index already scoped to it, for example
    /// one with remote documents registered.
    pub fn build_with_index(index: Arc<SpecIndex>) -> Result<Self> {
        let root = resolve_alias(index.root());
        if !root.is_mapping() {
            return Err(OasError::invalid_structure(
                "document",
                "a mapping",
                root.line,
                root.column,
            ));
        }
        let idx = index.as_ref();

        let webhooks = match root.find_key_full(WEBHOOKS_LABEL) {
            Some((key, value)) => {
                let node = idx.resolve(value, "building 'webhooks'")?;
                let hooks = build_collection(WEBHOOK_LABEL, &node, idx, true)
                    .context("building 'webhooks'")?;
                Some(NodeReference::new(hooks, Arc::clone(key), node))
            }
            None => None,
        };

        Ok(Self {
            version: extract_field(OPENAPI_LABEL, &root)?,
            info: extract_object(INFO_LABEL, &root, idx)?,
            json_schema_dialect: extract_field(JSON_SCHEMA_DIALECT_LABEL, &root)?,
            servers: extract_array(SERVERS_LABEL, &root, idx)?,
            paths: extract_object(PATHS_LABEL, &root, idx)?,
            webhooks,
            components: extract_object(COMPONENTS_LABEL, &root, idx)?,
            security: extract_array(SECURITY_LABEL, &root, idx)?,
            tags: extract_array(TAGS_LABEL, &root, idx)?,
            external_docs: extract_object(EXTERNAL_DOCS_LABEL, &root, idx)?,
            extensions: extract_extensions(&root),
            index: Arc::clone(&index),
        })
    }

    /// Number of path items in the document.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.paths.as_ref().map_or(0, |p| p.value.path_items.len())
    }
}

impl HasExtensions for Document {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
