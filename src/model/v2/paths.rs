use super::Operation;
use crate::error::{OasError, Result};
use crate::index::SpecIndex;
use crate::model::labels::{
    DELETE_LABEL, GET_LABEL, HEAD_LABEL, OPTIONS_LABEL, PATCH_LABEL, PATHS_LABEL, PATH_ITEM_LABEL,
    POST_LABEL, PUT_LABEL,
};
use crate::model::{
    build_collection, extract_extensions, extract_field, extract_object, Buildable, Extensions,
    HasExtensions, Node, NodeReference, ReferenceMap, ValueReference, REF_LABEL,
};
use std::sync::Arc;

/// The relative paths of the API.
///
/// Path items are built concurrently. Unlike OpenAPI 3, a path item that
/// is a reference is not resolved: its `$ref` text is kept on the item.
#[derive(Debug, Clone, Default)]
pub struct Paths {
    pub path_items: ReferenceMap<PathItem>,
    pub extensions: Extensions,
}

impl Paths {
    /// Look up a path item by its exact path.
    #[must_use]
    pub fn find_path(&self, path: &str) -> Option<&ValueReference<PathItem>> {
        self.path_items
            .iter()
            .find(|(key, _)| key.value == path)
            .map(|(_, item)| item)
    }
}

impl Buildable for Paths {
    fn build(&mut self, root: &Arc<Node>, idx: &SpecIndex) -> Result<()> {
        let node = root.target();
        if !node.is_mapping() {
            return Err(OasError::invalid_structure(
                PATHS_LABEL,
                "a mapping",
                node.line,
                node.column,
            ));
        }
        self.extensions = extract_extensions(node);
        self.path_items = build_collection(PATH_ITEM_LABEL, node, idx, false)?;
        Ok(())
    }
}

impl HasExtensions for Paths {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

/// The operations available on a single path.
#[derive(Debug, Clone, Default)]
pub struct PathItem {
    /// External definition of this path item, if it is a reference.
    pub reference: Option<NodeReference<String>>,
    pub get: Option<NodeReference<Operation>>,
    pub put: Option<NodeReference<Operation>>,
    pub post: Option<NodeReference<Operation>>,
    pub delete: Option<NodeReference<Operation>>,
    pub options: Option<NodeReference<Operation>>,
    pub head: Option<NodeReference<Operation>>,
    pub patch: Option<NodeReference<Operation>>,
    pub extensions: Extensions,
}

impl PathItem {
    /// Defined operations with their method names, in method order.
    pub fn operations(&self) -> impl Iterator<Item = (&'static str, &NodeReference<Operation>)> {
        [
            (GET_LABEL, self.get.as_ref()),
            (PUT_LABEL, self.put.as_ref()),
            (POST_LABEL, self.post.as_ref()),
            (DELETE_LABEL, self.delete.as_ref()),
            (OPTIONS_LABEL, self.options.as_ref()),
            (HEAD_LABEL, self.head.as_ref()),
            (PATCH_LABEL, self.patch.as_ref()),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.map(|op| (method, op)))
    }
}

impl Buildable for PathItem {
    fn build(&mut self, root: &Arc<Node>, idx: &SpecIndex) -> Result<()> {
        self.reference = extract_field(REF_LABEL, root)?;
        self.extensions = extract_extensions(root);
        self.get = extract_object(GET_LABEL, root, idx)?;
        self.put = extract_object(PUT_LABEL, root, idx)?;
        self.post = extract_object(POST_LABEL, root, idx)?;
        self.delete = extract_object(DELETE_LABEL, root, idx)?;
        self.options = extract_object(OPTIONS_LABEL, root, idx)?;
        self.head = extract_object(HEAD_LABEL, root, idx)?;
        self.patch = extract_object(PATCH_LABEL, root, idx)?;
        Ok(())
    }
}

impl HasExtensions for PathItem {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
