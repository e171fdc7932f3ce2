use crate::error::Result;
use crate::index::SpecIndex;
use crate::model::labels::{EMAIL_LABEL, NAME_LABEL, URL_LABEL};
use crate::model::{extract_extensions, extract_field, Buildable, Extensions, HasExtensions, Node, NodeReference};
use std::sync::Arc;

/// Contact information for the exposed API.
#[derive(Debug, Clone, Default)]
pub struct Contact {
    pub name: Option<NodeReference<String>>,
    pub url: Option<NodeReference<String>>,
    pub email: Option<NodeReference<String>>,
    pub extensions: Extensions,
}

impl Buildable for Contact {
    fn build(&mut self, root: &Arc<Node>, _idx: &SpecIndex) -> Result<()> {
        self.name = extract_field(NAME_LABEL, root)?;
        self.url = extract_field(URL_LABEL, root)?;
        self.email = extract_field(EMAIL_LABEL, root)?;
        self.extensions = extract_extensions(root);
        Ok(())
    }
}

impl HasExtensions for Contact {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
