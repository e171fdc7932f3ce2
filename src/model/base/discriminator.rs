use crate::error::Result;
use crate::index::SpecIndex;
use crate::model::labels::{MAPPING_LABEL, PROPERTY_NAME_LABEL};
use crate::model::{
    extract_field, extract_string_map, find_item_in_map, Buildable, Node, NodeReference,
    ReferenceMap, ValueReference,
};
use std::sync::Arc;

/// Polymorphism hint for schemas: which property names the concrete type,
/// and which schema each of its values maps to.
#[derive(Debug, Clone, Default)]
pub struct Discriminator {
    pub property_name: Option<NodeReference<String>>,
    pub mapping: ReferenceMap<String>,
    /// Key and value nodes of the `mapping` field itself.
    pub mapping_node: Option<NodeReference<()>>,
}

impl Discriminator {
    /// Look up the schema pointer for a discriminator value.
    #[must_use]
    pub fn find_mapping_value(&self, key: &str) -> Option<&ValueReference<String>> {
        find_item_in_map(key, &self.mapping)
    }
}

impl Buildable for Discriminator {
    fn build(&mut self, root: &Arc<Node>, _idx: &SpecIndex) -> Result<()> {
        self.property_name = extract_field(PROPERTY_NAME_LABEL, root)?;
        if let Some(mapping) = extract_string_map(MAPPING_LABEL, root)? {
            self.mapping_node = Some(NodeReference::new((), mapping.key_node, mapping.value_node));
            self.mapping = mapping.value;
        }
        Ok(())
    }
}
