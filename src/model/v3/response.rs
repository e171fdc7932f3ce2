use super::Link;
use crate::error::{OasError, Result};
use crate::index::SpecIndex;
use crate::model::labels::{
    ALLOW_EMPTY_VALUE_LABEL, ALLOW_RESERVED_LABEL, DEFAULT_LABEL, DEPRECATED_LABEL,
    DESCRIPTION_LABEL, EXAMPLE_LABEL, EXPLODE_LABEL, HEADERS_LABEL, LINKS_LABEL, REQUIRED_LABEL,
    RESPONSES_LABEL, RESPONSE_LABEL, STYLE_LABEL,
};
use crate::model::{
    build_referenced, extract_any, extract_extensions, extract_field, extract_map, extract_object,
    find_item_in_map, Buildable, Extensions, HasExtensions, KeyReference, Node, NodeReference,
    ReferenceMap, ValueReference,
};
use serde_yaml::Value;
use std::sync::Arc;

/// A header sent with a response.
#[derive(Debug, Clone, Default)]
pub struct Header {
    pub description: Option<NodeReference<String>>,
    pub required: Option<NodeReference<bool>>,
    pub deprecated: Option<NodeReference<bool>>,
    pub allow_empty_value: Option<NodeReference<bool>>,
    pub style: Option<NodeReference<String>>,
    pub explode: Option<NodeReference<bool>>,
    pub allow_reserved: Option<NodeReference<bool>>,
    /// Any-shaped example: object, array or scalar.
    pub example: Option<NodeReference<Value>>,
    pub extensions: Extensions,
}

impl Buildable for Header {
    fn build(&mut self, root: &Arc<Node>, _idx: &SpecIndex) -> Result<()> {
        self.description = extract_field(DESCRIPTION_LABEL, root)?;
        self.required = extract_field(REQUIRED_LABEL, root)?;
        self.deprecated = extract_field(DEPRECATED_LABEL, root)?;
        self.allow_empty_value = extract_field(ALLOW_EMPTY_VALUE_LABEL, root)?;
        self.style = extract_field(STYLE_LABEL, root)?;
        self.explode = extract_field(EXPLODE_LABEL, root)?;
        self.allow_reserved = extract_field(ALLOW_RESERVED_LABEL, root)?;
        self.example = extract_any(EXAMPLE_LABEL, root);
        self.extensions = extract_extensions(root);
        Ok(())
    }
}

impl HasExtensions for Header {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

/// A single response from an operation.
#[derive(Debug, Clone, Default)]
pub struct Response {
    pub description: Option<NodeReference<String>>,
    pub headers: Option<NodeReference<ReferenceMap<Header>>>,
    pub links: Option<NodeReference<ReferenceMap<Link>>>,
    pub extensions: Extensions,
}

impl Response {
    /// Look up a header by name (exact, then case-insensitive).
    #[must_use]
    pub fn find_header(&self, name: &str) -> Option<&ValueReference<Header>> {
        self.headers
            .as_ref()
            .and_then(|headers| find_item_in_map(name, &headers.value))
    }

    #[must_use]
    pub fn find_link(&self, name: &str) -> Option<&ValueReference<Link>> {
        self.links
            .as_ref()
            .and_then(|links| find_item_in_map(name, &links.value))
    }
}

impl Buildable for Response {
    fn build(&mut self, root: &Arc<Node>, idx: &SpecIndex) -> Result<()> {
        self.description = extract_field(DESCRIPTION_LABEL, root)?;
        self.extensions = extract_extensions(root);
        self.headers = extract_map(HEADERS_LABEL, root, idx)?;
        self.links = extract_map(LINKS_LABEL, root, idx)?;
        Ok(())
    }
}

impl HasExtensions for Response {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

/// The responses of an operation, keyed by status code.
///
/// Every key other than `default` and extensions is a status code or a
/// range such as `4XX`; codes keep their source order.
#[derive(Debug, Clone, Default)]
pub struct Responses {
    pub codes: ReferenceMap<Response>,
    pub default: Option<NodeReference<Response>>,
    pub extensions: Extensions,
}

impl Responses {
    /// Look up the response for a status code, e.g. `"200"`.
    #[must_use]
    pub fn find_response_by_code(&self, code: &str) -> Option<&ValueReference<Response>> {
        find_item_in_map(code, &self.codes)
    }
}

impl Buildable for Responses {
    fn build(&mut self, root: &Arc<Node>, idx: &SpecIndex) -> Result<()> {
        let node = root.target();
        if !node.is_mapping() {
            return Err(OasError::invalid_structure(
                RESPONSES_LABEL,
                "a mapping",
                node.line,
                node.column,
            ));
        }
        self.extensions = extract_extensions(node);
        self.default = extract_object(DEFAULT_LABEL, node, idx)?;

        for (key, value) in node.mapping_pairs() {
            if key.is_extension_key() || key.value == DEFAULT_LABEL {
                continue;
            }
            let context = format!("building {RESPONSE_LABEL} '{}'", key.value);
            let (response, target) = build_referenced::<Response>(value, idx, context)?;
            self.codes.insert(
                KeyReference::new(key.value.clone(), Arc::clone(key)),
                ValueReference::new(response, target),
            );
        }
        Ok(())
    }
}

impl HasExtensions for Responses {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
