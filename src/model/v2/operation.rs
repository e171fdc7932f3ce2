use super::SecurityRequirement;
use crate::error::Result;
use crate::index::SpecIndex;
use crate::model::base::ExternalDoc;
use crate::model::labels::{
    CONSUMES_LABEL, DEPRECATED_LABEL, DESCRIPTION_LABEL, EXTERNAL_DOCS_LABEL, OPERATION_ID_LABEL,
    PRODUCES_LABEL, SCHEMES_LABEL, SECURITY_LABEL, SUMMARY_LABEL, TAGS_LABEL,
};
use crate::model::{
    extract_array, extract_extensions, extract_field, extract_object, extract_string_array,
    Buildable, Extensions, HasExtensions, Node, NodeReference, ValueReference,
};
use std::sync::Arc;

/// A single API operation on a path.
#[derive(Debug, Clone, Default)]
pub struct Operation {
    pub tags: Option<NodeReference<Vec<ValueReference<String>>>>,
    pub summary: Option<NodeReference<String>>,
    pub description: Option<NodeReference<String>>,
    pub external_docs: Option<NodeReference<ExternalDoc>>,
    pub operation_id: Option<NodeReference<String>>,
    pub consumes: Option<NodeReference<Vec<ValueReference<String>>>>,
    pub produces: Option<NodeReference<Vec<ValueReference<String>>>>,
    pub schemes: Option<NodeReference<Vec<ValueReference<String>>>>,
    pub deprecated: Option<NodeReference<bool>>,
    pub security: Option<NodeReference<Vec<ValueReference<SecurityRequirement>>>>,
    pub extensions: Extensions,
}

impl Buildable for Operation {
    fn build(&mut self, root: &Arc<Node>, idx: &SpecIndex) -> Result<()> {
        self.tags = extract_string_array(TAGS_LABEL, root)?;
        self.summary = extract_field(SUMMARY_LABEL, root)?;
        self.description = extract_field(DESCRIPTION_LABEL, root)?;
        self.operation_id = extract_field(OPERATION_ID_LABEL, root)?;
        self.consumes = extract_string_array(CONSUMES_LABEL, root)?;
        self.produces = extract_string_array(PRODUCES_LABEL, root)?;
        self.schemes = extract_string_array(SCHEMES_LABEL, root)?;
        self.deprecated = extract_field(DEPRECATED_LABEL, root)?;
        self.extensions = extract_extensions(root);
        self.external_docs = extract_object(EXTERNAL_DOCS_LABEL, root, idx)?;
        self.security = extract_array(SECURITY_LABEL, root, idx)?;
        Ok(())
    }
}

impl HasExtensions for Operation {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
