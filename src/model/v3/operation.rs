use super::{Responses, SecurityRequirement, Server};
use crate::error::Result;
use crate::index::SpecIndex;
use crate::model::base::ExternalDoc;
use crate::model::labels::{
    DEPRECATED_LABEL, DESCRIPTION_LABEL, EXTERNAL_DOCS_LABEL, OPERATION_ID_LABEL, RESPONSES_LABEL,
    SECURITY_LABEL, SERVERS_LABEL, SUMMARY_LABEL, TAGS_LABEL,
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
    pub deprecated: Option<NodeReference<bool>>,
    pub responses: Option<NodeReference<Responses>>,
    pub servers: Option<NodeReference<Vec<ValueReference<Server>>>>,
    pub security: Option<NodeReference<Vec<ValueReference<SecurityRequirement>>>>,
    pub extensions: Extensions,
}

impl Buildable for Operation {
    fn build(&mut self, root: &Arc<Node>, idx: &SpecIndex) -> Result<()> {
        self.tags = extract_string_array(TAGS_LABEL, root)?;
        self.summary = extract_field(SUMMARY_LABEL, root)?;
        self.description = extract_field(DESCRIPTION_LABEL, root)?;
        self.operation_id = extract_field(OPERATION_ID_LABEL, root)?;
        self.deprecated = extract_field(DEPRECATED_LABEL, root)?;
        self.extensions = extract_extensions(root);
        self.external_docs = extract_object(EXTERNAL_DOCS_LABEL, root, idx)?;
        self.responses = extract_object(RESPONSES_LABEL, root, idx)?;
        self.servers = extract_array(SERVERS_LABEL, root, idx)?;
        self.security = extract_array(SECURITY_LABEL, root, idx)?;
        Ok(())
    }
}

impl HasExtensions for Operation {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
