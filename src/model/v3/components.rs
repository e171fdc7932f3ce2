use super::{Header, Link, PathItem, Response};
use crate::error::{ErrorContext, Result};
use crate::index::SpecIndex;
use crate::model::labels::{
    HEADERS_LABEL, LINKS_LABEL, PATH_ITEMS_LABEL, PATH_ITEM_LABEL, RESPONSES_LABEL,
};
use crate::model::{
    build_collection, extract_extensions, extract_map, find_item_in_map, Buildable, Extensions,
    HasExtensions, Node, NodeReference, ReferenceMap, ValueReference,
};
use std::sync::Arc;

/// Reusable objects that the rest of the document refers to.
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub responses: Option<NodeReference<ReferenceMap<Response>>>,
    pub headers: Option<NodeReference<ReferenceMap<Header>>>,
    pub links: Option<NodeReference<ReferenceMap<Link>>>,
    /// Reusable path items (3.1), built like the document's paths.
    pub path_items: Option<NodeReference<ReferenceMap<PathItem>>>,
    pub extensions: Extensions,
}

impl Components {
    #[must_use]
    pub fn find_response(&self, name: &str) -> Option<&ValueReference<Response>> {
        self.responses
            .as_ref()
            .and_then(|responses| find_item_in_map(name, &responses.value))
    }

    #[must_use]
    pub fn find_path_item(&self, name: &str) -> Option<&ValueReference<PathItem>> {
        self.path_items
            .as_ref()
            .and_then(|items| find_item_in_map(name, &items.value))
    }
}

impl Buildable for Components {
    fn build(&mut self, root: &Arc<Node>, idx: &SpecIndex) -> Result<()> {
        self.extensions = extract_extensions(root);
        self.responses = extract_map(RESPONSES_LABEL, root, idx)?;
        self.headers = extract_map(HEADERS_LABEL, root, idx)?;
        self.links = extract_map(LINKS_LABEL, root, idx)?;

        self.path_items = match root.target().find_key_full(PATH_ITEMS_LABEL) {
            Some((key, value)) => {
                let context = format!("building '{PATH_ITEMS_LABEL}'");
                let node = idx.resolve(value, &context)?;
                let items = build_collection(PATH_ITEM_LABEL, &node, idx, true).context(context)?;
                Some(NodeReference::new(items, Arc::clone(key), node))
            }
            None => None,
        };
        Ok(())
    }
}

impl HasExtensions for Components {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
