//! Specification version detection.

use crate::model::labels::{OPENAPI_LABEL, SWAGGER_LABEL};
use crate::model::Node;
use std::fmt;

/// Specification family and version a document declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecVersion {
    OpenApi30,
    OpenApi31,
    Swagger20,
    Unknown,
}

impl SpecVersion {
    /// Whether the document is any OpenAPI 3.x version.
    #[must_use]
    pub const fn is_openapi3(&self) -> bool {
        matches!(self, Self::OpenApi30 | Self::OpenApi31)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenApi30 => "OpenAPI 3.0",
            Self::OpenApi31 => "OpenAPI 3.1",
            Self::Swagger20 => "Swagger 2.0",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the version from the `openapi` or `swagger` root key.
#[must_use]
pub fn detect_spec_version(root: &Node) -> SpecVersion {
    let root = root.target();
    if let Some(version) = root.find_key(OPENAPI_LABEL) {
        let version = version.target().value.trim();
        if version.starts_with("3.1") {
            return SpecVersion::OpenApi31;
        }
        if version.starts_with("3.0") {
            return SpecVersion::OpenApi30;
        }
        tracing::debug!("Unrecognized openapi version '{}'", version);
        return SpecVersion::Unknown;
    }
    match root.find_key(SWAGGER_LABEL) {
        Some(version) if version.target().value.trim().starts_with("2.0") => SpecVersion::Swagger20,
        _ => SpecVersion::Unknown,
    }
}

/// The version string a document declares, if any.
#[must_use]
pub fn declared_version(root: &Node) -> Option<String> {
    let root = root.target();
    root.find_key(OPENAPI_LABEL)
        .or_else(|| root.find_key(SWAGGER_LABEL))
        .map(|node| node.target().value.clone())
}
