use crate::error::{OasError, Result};
use crate::index::SpecIndex;
use crate::model::labels::{
    AUTHORIZATION_URL_LABEL, DESCRIPTION_LABEL, FLOW_LABEL, IN_LABEL, NAME_LABEL, SCOPES_LABEL,
    TOKEN_URL_LABEL, TYPE_LABEL,
};
use crate::model::{
    extract_extensions, extract_field, extract_object, find_item_in_map, Buildable, Extensions,
    HasExtensions, KeyReference, Node, NodeDecode, NodeReference, ReferenceMap, ValueReference,
};
use std::sync::Arc;

/// A security scheme usable by operations.
#[derive(Debug, Clone, Default)]
pub struct SecurityScheme {
    pub scheme_type: Option<NodeReference<String>>,
    pub description: Option<NodeReference<String>>,
    pub name: Option<NodeReference<String>>,
    pub location: Option<NodeReference<String>>,
    pub flow: Option<NodeReference<String>>,
    pub authorization_url: Option<NodeReference<String>>,
    pub token_url: Option<NodeReference<String>>,
    pub scopes: Option<NodeReference<Scopes>>,
    pub extensions: Extensions,
}

impl Buildable for SecurityScheme {
    fn build(&mut self, root: &Arc<Node>, idx: &SpecIndex) -> Result<()> {
        self.scheme_type = extract_field(TYPE_LABEL, root)?;
        self.description = extract_field(DESCRIPTION_LABEL, root)?;
        self.name = extract_field(NAME_LABEL, root)?;
        self.location = extract_field(IN_LABEL, root)?;
        self.flow = extract_field(FLOW_LABEL, root)?;
        self.authorization_url = extract_field(AUTHORIZATION_URL_LABEL, root)?;
        self.token_url = extract_field(TOKEN_URL_LABEL, root)?;
        self.extensions = extract_extensions(root);
        self.scopes = extract_object(SCOPES_LABEL, root, idx)?;
        Ok(())
    }
}

impl HasExtensions for SecurityScheme {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

/// OAuth2 scope names and their descriptions.
#[derive(Debug, Clone, Default)]
pub struct Scopes {
    pub values: ReferenceMap<String>,
    pub extensions: Extensions,
}

impl Scopes {
    /// Description of `scope`.
    #[must_use]
    pub fn find_scope(&self, scope: &str) -> Option<&ValueReference<String>> {
        find_item_in_map(scope, &self.values)
    }
}

impl Buildable for Scopes {
    fn build(&mut self, root: &Arc<Node>, _idx: &SpecIndex) -> Result<()> {
        self.extensions = extract_extensions(root);
        self.values = ReferenceMap::new();
        for (key, value) in root.target().mapping_pairs() {
            if key.is_extension_key() {
                continue;
            }
            let description = String::decode(value).ok_or_else(|| {
                OasError::invalid_value(key.value.clone(), String::EXPECTED, value.line, value.column)
            })?;
            self.values.insert(
                KeyReference::new(key.value.clone(), Arc::clone(key)),
                ValueReference::new(description, Arc::clone(value)),
            );
        }
        Ok(())
    }
}

impl HasExtensions for Scopes {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use crate::parsers::parse_document_str;

    #[test]
    fn test_build_oauth_scheme() {
        let yaml = "type: oauth2\nflow: implicit\nauthorizationUrl: https://auth.example.com\nscopes:\n  write:pets: modify pets\n  read:pets: read pets\n  x-scope-owner: team\n";
        let root = parse_document_str(yaml).unwrap();
        let idx = SpecIndex::new(Arc::clone(&root), &BuildConfig::default());
        let scheme: SecurityScheme = crate::model::build_object(&root, &idx).unwrap();

        assert_eq!(scheme.scheme_type.as_ref().unwrap().value, "oauth2");
        let scopes = &scheme.scopes.as_ref().unwrap().value;
        assert_eq!(scopes.values.len(), 2);
        assert_eq!(scopes.find_scope("read:pets").unwrap().value, "read pets");
        assert_eq!(scopes.find_scope("READ:PETS").unwrap().line(), 6);
        assert!(scopes.find_extension("x-scope-owner").is_some());
        assert!(scopes.find_scope("admin").is_none());
    }
}
