use super::{Contact, License};
use crate::error::Result;
use crate::index::SpecIndex;
use crate::model::labels::{
    CONTACT_LABEL, DESCRIPTION_LABEL, LICENSE_LABEL, SUMMARY_LABEL, TERMS_OF_SERVICE_LABEL,
    TITLE_LABEL, VERSION_LABEL,
};
use crate::model::{
    extract_extensions, extract_field, extract_object, Buildable, Extensions, HasExtensions, Node,
    NodeReference,
};
use std::sync::Arc;

/// Metadata about the API.
///
/// `summary` only exists in OpenAPI 3.1.
#[derive(Debug, Clone, Default)]
pub struct Info {
    pub title: Option<NodeReference<String>>,
    pub summary: Option<NodeReference<String>>,
    pub description: Option<NodeReference<String>>,
    pub terms_of_service: Option<NodeReference<String>>,
    pub contact: Option<NodeReference<Contact>>,
    pub license: Option<NodeReference<License>>,
    pub version: Option<NodeReference<String>>,
    pub extensions: Extensions,
}

impl Buildable for Info {
    fn build(&mut self, root: &Arc<Node>, idx: &SpecIndex) -> Result<()> {
        self.title = extract_field(TITLE_LABEL, root)?;
        self.summary = extract_field(SUMMARY_LABEL, root)?;
        self.description = extract_field(DESCRIPTION_LABEL, root)?;
        self.terms_of_service = extract_field(TERMS_OF_SERVICE_LABEL, root)?;
        self.version = extract_field(VERSION_LABEL, root)?;
        self.extensions = extract_extensions(root);
        self.contact = extract_object(CONTACT_LABEL, root, idx)?;
        self.license = extract_object(LICENSE_LABEL, root, idx)?;
        Ok(())
    }
}

impl HasExtensions for Info {
    fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
