use crate::error::{OasError, Result};
use crate::index::SpecIndex;
use crate::model::{decode_sequence, Buildable, KeyReference, Node, ReferenceMap, ValueReference};
use std::sync::Arc;

/// Names the security schemes (and their scopes) a request must satisfy.
///
/// Shared by Swagger 2.0 and OpenAPI 3.x: a mapping of scheme name to a
/// list of scope names.
#[derive(Debug, Clone, Default)]
pub struct SecurityRequirement {
    pub requirements: ReferenceMap<Vec<ValueReference<String>>>,
}

impl SecurityRequirement {
    /// Scopes required for `scheme`.
    #[must_use]
    pub fn find_requirement(&self, scheme: &str) -> Option<&ValueReference<Vec<ValueReference<String>>>> {
        crate::model::find_item_in_map(scheme, &self.requirements)
    }
}

impl Buildable for SecurityRequirement {
    fn build(&mut self, root: &Arc<Node>, _idx: &SpecIndex) -> Result<()> {
        let root = root.target();
        if !root.is_mapping() {
            return Err(OasError::invalid_structure(
                "security requirement",
                "a mapping",
                root.line,
                root.column,
            ));
        }
        self.requirements = ReferenceMap::new();
        for (name, scopes) in root.mapping_pairs() {
            if !scopes.target().is_sequence() {
                return Err(OasError::invalid_structure(
                    name.value.clone(),
                    "a sequence of scopes",
                    scopes.line,
                    scopes.column,
                ));
            }
            let values = decode_sequence::<String>(&name.value, scopes)?;
            self.requirements.insert(
                KeyReference::new(name.value.clone(), Arc::clone(name)),
                ValueReference::new(values, Arc::clone(scopes)),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use crate::parsers::parse_document_str;

    #[test]
    fn test_build_requirement() {
        let root = parse_document_str("petstore_auth: [write:pets, read:pets]\napi_key: []\n").unwrap();
        let idx = SpecIndex::new(Arc::clone(&root), &BuildConfig::default());
        let req: SecurityRequirement = crate::model::build_object(&root, &idx).unwrap();

        assert_eq!(req.requirements.len(), 2);
        let scopes = req.find_requirement("petstore_auth").unwrap();
        assert_eq!(scopes.value.len(), 2);
        assert_eq!(scopes.value[1].value, "read:pets");
        assert!(req.find_requirement("api_key").unwrap().value.is_empty());
    }

    #[test]
    fn test_scopes_must_be_sequence() {
        let root = parse_document_str("api_key: read\n").unwrap();
        let idx = SpecIndex::new(Arc::clone(&root), &BuildConfig::default());
        assert!(crate::model::build_object::<SecurityRequirement>(&root, &idx).is_err());
    }
}
