use super::ExternalDoc;
use crate::error::Result;
use crate::index::SpecIndex;
use crate::model::labels::{DESCRIPTION_LABEL, EXTERNAL_DOCS_LABEL, NAME_LABEL};
use crate::model::{
    extract_extensions, extract_field, extract_object, Buildable, Extensions, HasExtensions, Node,
    NodeReference,
};
use std::sync::Arc;

/// Metadata for a tag used by operations.
#[derive(Debug, Clone, Default)]
pub struct Tag {
    pub name: Option<NodeReference<String>>,
    pub description: Option<NodeReference<String>>,
    pub external_docs: Option<NodeReference<ExternalDoc>>,
    pub extensions: Extensions,
}

impl Buildable for Tag {
    fn build(&mut self, root: &Arc<Node>, idx: &SpecIndex) -> Result<()> {
        self.name = extract_field(NAME_LABEL, root)?;
        self.description = extract_field(DESCRIPTION_LABEL, root)?;
        self.extensions = extract_extensions(root);
        self.external_docs = extract_object(EXTERNAL_DOCS_LABEL, root, idx)?;
        Ok(())
    }
}

impl HasExtensions for Tag {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
