use crate::error::Result;
use crate::index::SpecIndex;
use crate::model::labels::{
    COLLECTION_FORMAT_LABEL, DEFAULT_LABEL, DESCRIPTION_LABEL, ENUM_LABEL,
    EXCLUSIVE_MAXIMUM_LABEL, EXCLUSIVE_MINIMUM_LABEL, FORMAT_LABEL, ITEMS_LABEL, MAXIMUM_LABEL,
    MAX_ITEMS_LABEL, MAX_LENGTH_LABEL, MINIMUM_LABEL, MIN_ITEMS_LABEL, MIN_LENGTH_LABEL,
    MULTIPLE_OF_LABEL, PATTERN_LABEL, TYPE_LABEL, UNIQUE_ITEMS_LABEL,
};
use crate::model::{
    extract_any, extract_extensions, extract_field, extract_object, extract_scalar_array,
    Buildable, Extensions, HasExtensions, Node, NodeReference, ValueReference,
};
use serde_yaml::Value;
use std::sync::Arc;

/// Validation keywords shared by headers and items.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    pub maximum: Option<NodeReference<f64>>,
    pub exclusive_maximum: Option<NodeReference<bool>>,
    pub minimum: Option<NodeReference<f64>>,
    pub exclusive_minimum: Option<NodeReference<bool>>,
    pub max_length: Option<NodeReference<i64>>,
    pub min_length: Option<NodeReference<i64>>,
    pub pattern: Option<NodeReference<String>>,
    pub max_items: Option<NodeReference<i64>>,
    pub min_items: Option<NodeReference<i64>>,
    pub unique_items: Option<NodeReference<bool>>,
    pub enum_values: Option<NodeReference<Vec<ValueReference<Value>>>>,
    pub multiple_of: Option<NodeReference<f64>>,
}

impl Constraints {
    fn extract(root: &Node) -> Result<Self> {
        Ok(Self {
            maximum: extract_field(MAXIMUM_LABEL, root)?,
            exclusive_maximum: extract_field(EXCLUSIVE_MAXIMUM_LABEL, root)?,
            minimum: extract_field(MINIMUM_LABEL, root)?,
            exclusive_minimum: extract_field(EXCLUSIVE_MINIMUM_LABEL, root)?,
            max_length: extract_field(MAX_LENGTH_LABEL, root)?,
            min_length: extract_field(MIN_LENGTH_LABEL, root)?,
            pattern: extract_field(PATTERN_LABEL, root)?,
            max_items: extract_field(MAX_ITEMS_LABEL, root)?,
            min_items: extract_field(MIN_ITEMS_LABEL, root)?,
            unique_items: extract_field(UNIQUE_ITEMS_LABEL, root)?,
            enum_values: extract_scalar_array(ENUM_LABEL, root)?,
            multiple_of: extract_field(MULTIPLE_OF_LABEL, root)?,
        })
    }
}

/// Type of the elements of an array parameter or header.
#[derive(Debug, Clone, Default)]
pub struct Items {
    pub item_type: Option<NodeReference<String>>,
    pub format: Option<NodeReference<String>>,
    pub collection_format: Option<NodeReference<String>>,
    pub items: Option<NodeReference<Box<Items>>>,
    /// Any-shaped default: object, array or scalar.
    pub default: Option<NodeReference<Value>>,
    pub constraints: Constraints,
    pub extensions: Extensions,
}

impl Buildable for Items {
    fn build(&mut self, root: &Arc<Node>, idx: &SpecIndex) -> Result<()> {
        self.item_type = extract_field(TYPE_LABEL, root)?;
        self.format = extract_field(FORMAT_LABEL, root)?;
        self.collection_format = extract_field(COLLECTION_FORMAT_LABEL, root)?;
        self.default = extract_any(DEFAULT_LABEL, root);
        self.constraints = Constraints::extract(root)?;
        self.extensions = extract_extensions(root);
        self.items = extract_nested_items(root, idx)?;
        Ok(())
    }
}

impl HasExtensions for Items {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

/// A response header.
#[derive(Debug, Clone, Default)]
pub struct Header {
    pub header_type: Option<NodeReference<String>>,
    pub format: Option<NodeReference<String>>,
    pub description: Option<NodeReference<String>>,
    pub items: Option<NodeReference<Box<Items>>>,
    pub collection_format: Option<NodeReference<String>>,
    /// Any-shaped default: object, array or scalar.
    pub default: Option<NodeReference<Value>>,
    pub constraints: Constraints,
    pub extensions: Extensions,
}

impl Buildable for Header {
    fn build(&mut self, root: &Arc<Node>, idx: &SpecIndex) -> Result<()> {
        self.header_type = extract_field(TYPE_LABEL, root)?;
        self.format = extract_field(FORMAT_LABEL, root)?;
        self.description = extract_field(DESCRIPTION_LABEL, root)?;
        self.collection_format = extract_field(COLLECTION_FORMAT_LABEL, root)?;
        self.default = extract_any(DEFAULT_LABEL, root);
        self.constraints = Constraints::extract(root)?;
        self.extensions = extract_extensions(root);
        self.items = extract_nested_items(root, idx)?;
        Ok(())
    }
}

impl HasExtensions for Header {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

fn extract_nested_items(root: &Node, idx: &SpecIndex) -> Result<Option<NodeReference<Box<Items>>>> {
    Ok(extract_object::<Items>(ITEMS_LABEL, root, idx)?
        .map(|items| NodeReference::new(Box::new(items.value), items.key_node, items.value_node)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use crate::parsers::parse_document_str;

    fn build_header(yaml: &str) -> Header {
        let root = parse_document_str(yaml).unwrap();
        let idx = SpecIndex::new(Arc::clone(&root), &BuildConfig::default());
        crate::model::build_object(&root, &idx).unwrap()
    }

    #[test]
    fn test_default_decodes_any_shape() {
        let object = build_header("type: object\ndefault: {limit: 10}\n");
        assert!(object.default.unwrap().value.is_mapping());

        let array = build_header("type: array\ndefault: [1, 2]\n");
        assert!(array.default.unwrap().value.is_sequence());

        let scalar = build_header("type: integer\ndefault: 5\n");
        assert_eq!(scalar.default.unwrap().value, Value::from(5));
    }

    const ITEMS_LOOP: &str = "type: array\nitems:\n  $ref: '#/defs/A'\ndefs:\n  A:\n    type: array\n    items:\n      $ref: '#/defs/B'\n  B:\n    type: string\n    items:\n      $ref: '#/defs/A'\n";

    fn build_with_policy(yaml: &str, allow_circular: bool) -> (Result<Header>, SpecIndex) {
        let root = parse_document_str(yaml).unwrap();
        let config = BuildConfig::builder()
            .allow_circular_references(allow_circular)
            .build();
        let idx = SpecIndex::new(Arc::clone(&root), &config);
        (crate::model::build_object(&root, &idx), idx)
    }

    #[test]
    fn test_items_loop_is_rejected_when_forbidden() {
        let (built, idx) = build_with_policy(ITEMS_LOOP, false);
        let err = built.unwrap_err();
        assert!(err.is_circular_reference(), "{err}");
        let message = format!("{err}: {}", std::error::Error::source(&err).unwrap());
        assert!(message.contains("#/defs/A -> #/defs/B -> #/defs/A"), "{message}");
        assert!(message.contains("line 12, column 13"), "{message}");
        assert!(idx.circular_references().is_empty());
    }

    #[test]
    fn test_items_loop_builds_best_effort_when_tolerated() {
        let (built, idx) = build_with_policy(ITEMS_LOOP, true);
        let header = built.unwrap();

        let a = &header.items.as_ref().unwrap().value;
        assert_eq!(a.item_type.as_ref().unwrap().value, "array");
        let b = &a.items.as_ref().unwrap().value;
        assert_eq!(b.item_type.as_ref().unwrap().value, "string");
        let closing = b.items.as_ref().unwrap();
        assert!(closing.value_node.is_reference());
        assert!(closing.value.items.is_none());

        let recorded = idx.circular_references();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].journey, vec!["#/defs/A", "#/defs/B", "#/defs/A"]);
        assert_eq!((recorded[0].line, recorded[0].column), (12, 13));
    }

    #[test]
    fn test_shared_items_target_is_not_a_loop() {
        let yaml = "type: array\nitems:\n  type: array\n  items:\n    $ref: '#/defs/Leaf'\ndefs:\n  Leaf:\n    type: array\n    items:\n      $ref: '#/defs/Name'\n  Name:\n    type: string\n";
        let (built, idx) = build_with_policy(yaml, false);
        let header = built.unwrap();
        let leaf = &header.items.as_ref().unwrap().value.items.as_ref().unwrap().value;
        let name = &leaf.items.as_ref().unwrap().value;
        assert_eq!(name.item_type.as_ref().unwrap().value, "string");
        assert!(idx.circular_references().is_empty());
    }

    #[test]
    fn test_nested_items_and_constraints() {
        let header = build_header(
            "type: array\nitems:\n  type: array\n  items:\n    type: integer\n    maximum: 9\n    enum: [1, 3]\nmaxItems: 4\nuniqueItems: true\n",
        );
        assert_eq!(header.constraints.max_items.as_ref().unwrap().value, 4);
        assert!(header.constraints.unique_items.as_ref().unwrap().value);

        let inner = &header.items.as_ref().unwrap().value;
        let innermost = &inner.items.as_ref().unwrap().value;
        assert_eq!(innermost.item_type.as_ref().unwrap().value, "integer");
        assert_eq!(innermost.constraints.maximum.as_ref().unwrap().value, 9.0);
        assert_eq!(innermost.constraints.enum_values.as_ref().unwrap().value.len(), 2);
    }
}
