use crate::error::Result;
use crate::index::SpecIndex;
use crate::model::labels::{DESCRIPTION_LABEL, URL_LABEL};
use crate::model::{extract_extensions, extract_field, Buildable, Extensions, HasExtensions, Node, NodeReference};
use std::sync::Arc;

/// A link to external documentation.
#[derive(Debug, Clone, Default)]
pub struct ExternalDoc {
    pub description: Option<NodeReference<String>>,
    pub url: Option<NodeReference<String>>,
    pub extensions: Extensions,
}

impl Buildable for ExternalDoc {
    fn build(&mut self, root: &Arc<Node>, _idx: &SpecIndex) -> Result<()> {
        self.description = extract_field(DESCRIPTION_LABEL, root)?;
        self.url = extract_field(URL_LABEL, root)?;
        self.extensions = extract_extensions(root);
        Ok(())
    }
}

impl HasExtensions for ExternalDoc {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
