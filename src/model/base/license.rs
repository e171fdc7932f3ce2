use crate::error::Result;
use crate::index::SpecIndex;
use crate::model::labels::{IDENTIFIER_LABEL, NAME_LABEL, URL_LABEL};
use crate::model::{extract_extensions, extract_field, Buildable, Extensions, HasExtensions, Node, NodeReference};
use std::sync::Arc;

/// License information for the exposed API.
///
/// `identifier` is an SPDX expression and only exists in OpenAPI 3.1.
#[derive(Debug, Clone, Default)]
pub struct License {
    pub name: Option<NodeReference<String>>,
    pub identifier: Option<NodeReference<String>>,
    pub url: Option<NodeReference<String>>,
    pub extensions: Extensions,
}

impl Buildable for License {
    fn build(&mut self, root: &Arc<Node>, _idx: &SpecIndex) -> Result<()> {
        self.name = extract_field(NAME_LABEL, root)?;
        self.identifier = extract_field(IDENTIFIER_LABEL, root)?;
        self.url = extract_field(URL_LABEL, root)?;
        self.extensions = extract_extensions(root);
        Ok(())
    }
}

impl HasExtensions for License {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
