use crate::error::Result;
use crate::index::SpecIndex;
use crate::model::labels::{DEFAULT_LABEL, DESCRIPTION_LABEL, ENUM_LABEL, URL_LABEL, VARIABLES_LABEL};
use crate::model::{
    extract_extensions, extract_field, extract_map, extract_string_array, find_item_in_map,
    Buildable, Extensions, HasExtensions, Node, NodeReference, ReferenceMap, ValueReference,
};
use std::sync::Arc;

/// A server hosting the API.
#[derive(Debug, Clone, Default)]
pub struct Server {
    pub url: Option<NodeReference<String>>,
    pub description: Option<NodeReference<String>>,
    pub variables: Option<NodeReference<ReferenceMap<ServerVariable>>>,
    pub extensions: Extensions,
}

impl Server {
    /// Look up a URL template variable by name.
    #[must_use]
    pub fn find_variable(&self, name: &str) -> Option<&ValueReference<ServerVariable>> {
        self.variables
            .as_ref()
            .and_then(|vars| find_item_in_map(name, &vars.value))
    }
}

impl Buildable for Server {
    fn build(&mut self, root: &Arc<Node>, idx: &SpecIndex) -> Result<()> {
        self.url = extract_field(URL_LABEL, root)?;
        self.description = extract_field(DESCRIPTION_LABEL, root)?;
        self.extensions = extract_extensions(root);
        self.variables = extract_map(VARIABLES_LABEL, root, idx)?;
        Ok(())
    }
}

impl HasExtensions for Server {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

/// A substitution variable in a server URL template.
#[derive(Debug, Clone, Default)]
pub struct ServerVariable {
    pub enum_values: Option<NodeReference<Vec<ValueReference<String>>>>,
    pub default: Option<NodeReference<String>>,
    pub description: Option<NodeReference<String>>,
    pub extensions: Extensions,
}

impl Buildable for ServerVariable {
    fn build(&mut self, root: &Arc<Node>, _idx: &SpecIndex) -> Result<()> {
        self.enum_values = extract_string_array(ENUM_LABEL, root)?;
        self.default = extract_field(DEFAULT_LABEL, root)?;
        self.description = extract_field(DESCRIPTION_LABEL, root)?;
        self.extensions = extract_extensions(root);
        Ok(())
    }
}

impl HasExtensions for ServerVariable {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
