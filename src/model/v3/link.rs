use super::Server;
use crate::error::Result;
use crate::index::SpecIndex;
use crate::model::labels::{
    DESCRIPTION_LABEL, OPERATION_ID_LABEL, OPERATION_REF_LABEL, PARAMETERS_LABEL,
    REQUEST_BODY_LABEL, SERVER_LABEL,
};
use crate::model::{
    extract_any, extract_extensions, extract_field, extract_object, extract_string_map,
    find_item_in_map, Buildable, Extensions, HasExtensions, Node, NodeReference, ReferenceMap,
    ValueReference,
};
use serde_yaml::Value;
use std::sync::Arc;

/// A design-time link from a response to another operation.
///
/// Parameters map names of the target operation's parameters to runtime
/// expressions evaluated against the response.
#[derive(Debug, Clone, Default)]
pub struct Link {
    pub operation_ref: Option<NodeReference<String>>,
    pub operation_id: Option<NodeReference<String>>,
    pub parameters: Option<NodeReference<ReferenceMap<String>>>,
    pub request_body: Option<NodeReference<Value>>,
    pub description: Option<NodeReference<String>>,
    pub server: Option<NodeReference<Server>>,
    pub extensions: Extensions,
}

impl Link {
    /// Look up a parameter expression by parameter name.
    #[must_use]
    pub fn find_parameter(&self, name: &str) -> Option<&ValueReference<String>> {
        self.parameters
            .as_ref()
            .and_then(|params| find_item_in_map(name, &params.value))
    }
}

impl Buildable for Link {
    fn build(&mut self, root: &Arc<Node>, idx: &SpecIndex) -> Result<()> {
        self.operation_ref = extract_field(OPERATION_REF_LABEL, root)?;
        self.operation_id = extract_field(OPERATION_ID_LABEL, root)?;
        self.parameters = extract_string_map(PARAMETERS_LABEL, root)?;
        self.request_body = extract_any(REQUEST_BODY_LABEL, root);
        self.description = extract_field(DESCRIPTION_LABEL, root)?;
        self.extensions = extract_extensions(root);
        self.server = extract_object(SERVER_LABEL, root, idx)?;
        Ok(())
    }
}

impl HasExtensions for Link {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
