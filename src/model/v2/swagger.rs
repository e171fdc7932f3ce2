use super::{Paths, SecurityRequirement, SecurityScheme};
use crate::config::BuildConfig;
use crate::error::{OasError, Result};
use crate::index::SpecIndex;
use crate::model::base::{ExternalDoc, Info, Tag};
use crate::model::labels::{
    BASE_PATH_LABEL, CONSUMES_LABEL, EXTERNAL_DOCS_LABEL, HOST_LABEL, INFO_LABEL, PATHS_LABEL,
    PRODUCES_LABEL, SCHEMES_LABEL, SECURITY_DEFINITIONS_LABEL, SECURITY_LABEL, SWAGGER_LABEL,
    TAGS_LABEL,
};
use crate::model::{
    extract_array, extract_extensions, extract_field, extract_map, extract_object,
    extract_string_array, resolve_alias, Extensions, HasExtensions, Node, NodeReference,
    ReferenceMap, ValueReference,
};
use std::sync::Arc;

/// Root of a Swagger 2.0 document.
#[derive(Debug, Clone)]
pub struct Swagger {
    /// The `swagger` version string.
    pub version: Option<NodeReference<String>>,
    pub info: Option<NodeReference<Info>>,
    pub host: Option<NodeReference<String>>,
    pub base_path: Option<NodeReference<String>>,
    pub schemes: Option<NodeReference<Vec<ValueReference<String>>>>,
    pub consumes: Option<NodeReference<Vec<ValueReference<String>>>>,
    pub produces: Option<NodeReference<Vec<ValueReference<String>>>>,
    pub paths: Option<NodeReference<Paths>>,
    pub security_definitions: Option<NodeReference<ReferenceMap<SecurityScheme>>>,
    pub security: Option<NodeReference<Vec<ValueReference<SecurityRequirement>>>>,
    pub tags: Option<NodeReference<Vec<ValueReference<Tag>>>>,
    pub external_docs: Option<NodeReference<ExternalDoc>>,
    pub extensions: Extensions,
    /// The index the document was built against.
    pub index: Arc<SpecIndex>,
}

impl Swagger {
    /// Index `root` with `config` and build the document from it.
    pub fn build_from_root(root: Arc<Node>, config: &BuildConfig) -> Result<Self> {
        let index = Arc::new(SpecIndex::new(root, config));
        Self::build_with_index(index)
    }

    /// Build the document from an index already scoped to it.
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

        Ok(Self {
            version: extract_field(SWAGGER_LABEL, &root)?,
            info: extract_object(INFO_LABEL, &root, idx)?,
            host: extract_field(HOST_LABEL, &root)?,
            base_path: extract_field(BASE_PATH_LABEL, &root)?,
            schemes: extract_string_array(SCHEMES_LABEL, &root)?,
            consumes: extract_string_array(CONSUMES_LABEL, &root)?,
            produces: extract_string_array(PRODUCES_LABEL, &root)?,
            paths: extract_object(PATHS_LABEL, &root, idx)?,
            security_definitions: extract_map(SECURITY_DEFINITIONS_LABEL, &root, idx)?,
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

impl HasExtensions for Swagger {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
