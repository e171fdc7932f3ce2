use super::{Operation, Server};
use crate::error::Result;
use crate::index::SpecIndex;
use crate::model::labels::{
    DELETE_LABEL, DESCRIPTION_LABEL, GET_LABEL, HEAD_LABEL, OPTIONS_LABEL, PATCH_LABEL,
    POST_LABEL, PUT_LABEL, SERVERS_LABEL, SUMMARY_LABEL, TRACE_LABEL,
};
use crate::model::{
    extract_array, extract_extensions, extract_field, extract_object, Buildable, Extensions,
    HasExtensions, Node, NodeReference, ValueReference,
};
use std::sync::Arc;

/// The operations available on a single path.
#[derive(Debug, Clone, Default)]
pub struct PathItem {
    pub summary: Option<NodeReference<String>>,
    pub description: Option<NodeReference<String>>,
    pub get: Option<NodeReference<Operation>>,
    pub put: Option<NodeReference<Operation>>,
    pub post: Option<NodeReference<Operation>>,
    pub delete: Option<NodeReference<Operation>>,
    pub options: Option<NodeReference<Operation>>,
    pub head: Option<NodeReference<Operation>>,
    pub patch: Option<NodeReference<Operation>>,
    pub trace: Option<NodeReference<Operation>>,
    pub servers: Option<NodeReference<Vec<ValueReference<Server>>>>,
    pub extensions: Extensions,
}

impl PathItem {
    /// Every operation slot paired with its method name, in method order.
    pub fn operation_slots(&self) -> [(&'static str, Option<&NodeReference<Operation>>); 8] {
        [
            (GET_LABEL, self.get.as_ref()),
            (PUT_LABEL, self.put.as_ref()),
            (POST_LABEL, self.post.as_ref()),
            (DELETE_LABEL, self.delete.as_ref()),
            (OPTIONS_LABEL, self.options.as_ref()),
            (HEAD_LABEL, self.head.as_ref()),
            (PATCH_LABEL, self.patch.as_ref()),
            (TRACE_LABEL, self.trace.as_ref()),
        ]
    }

    /// Defined operations with their method names, in method order.
    pub fn operations(&self) -> impl Iterator<Item = (&'static str, &NodeReference<Operation>)> {
        self.operation_slots()
            .into_iter()
            .filter_map(|(method, op)| op.map(|op| (method, op)))
    }
}

impl Buildable for PathItem {
    fn build(&mut self, root: &Arc<Node>, idx: &SpecIndex) -> Result<()> {
        self.summary = extract_field(SUMMARY_LABEL, root)?;
        self.description = extract_field(DESCRIPTION_LABEL, root)?;
        self.extensions = extract_extensions(root);
        self.get = extract_object(GET_LABEL, root, idx)?;
        self.put = extract_object(PUT_LABEL, root, idx)?;
        self.post = extract_object(POST_LABEL, root, idx)?;
        self.delete = extract_object(DELETE_LABEL, root, idx)?;
        self.options = extract_object(OPTIONS_LABEL, root, idx)?;
        self.head = extract_object(HEAD_LABEL, root, idx)?;
        self.patch = extract_object(PATCH_LABEL, root, idx)?;
        self.trace = extract_object(TRACE_LABEL, root, idx)?;
        self.servers = extract_array(SERVERS_LABEL, root, idx)?;
        Ok(())
    }
}

impl HasExtensions for PathItem {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
