use super::PathItem;
use crate::error::{OasError, Result};
use crate::index::SpecIndex;
use crate::model::labels::{PATHS_LABEL, PATH_ITEM_LABEL};
use crate::model::{
    build_collection, extract_extensions, Buildable, Extensions, HasExtensions, Node,
    ReferenceMap, ValueReference,
};
use std::sync::Arc;

/// The relative paths of the API and the path items behind them.
///
/// Path items are independent of each other and are built concurrently.
/// A path item written as a reference is resolved before it is built.
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
        self.path_items = build_collection(PATH_ITEM_LABEL, node, idx, true)?;
        Ok(())
    }
}

impl HasExtensions for Paths {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
