//! Parse and build stage.

use crate::config::{BuildConfig, Validatable};
use crate::error::{ErrorContext, OasError, ParseErrorKind, Result};
use crate::index::SpecIndex;
use crate::model::v2::Swagger;
use crate::model::v3::Document;
use crate::model::Node;
use crate::parsers::{declared_version, detect_spec_version, parse_document, parse_document_str, SpecVersion};
use std::path::Path;
use std::sync::Arc;

/// A built document of whichever version the source declared.
#[derive(Debug, Clone)]
pub enum BuiltDocument {
    OpenApi3(Document),
    Swagger2(Swagger),
}

impl BuiltDocument {
    /// The index the document was built with.
    #[must_use]
    pub fn index(&self) -> &Arc<SpecIndex> {
        match self {
            Self::OpenApi3(doc) => &doc.index,
            Self::Swagger2(doc) => &doc.index,
        }
    }

    #[must_use]
    pub fn path_count(&self) -> usize {
        match self {
            Self::OpenApi3(doc) => doc.path_count(),
            Self::Swagger2(doc) => doc.path_count(),
        }
    }

    /// The OpenAPI 3.x document, if this is one.
    #[must_use]
    pub const fn as_openapi3(&self) -> Option<&Document> {
        match self {
            Self::OpenApi3(doc) => Some(doc),
            Self::Swagger2(_) => None,
        }
    }

    /// The Swagger 2.0 document, if this is one.
    #[must_use]
    pub const fn as_swagger2(&self) -> Option<&Swagger> {
        match self {
            Self::Swagger2(doc) => Some(doc),
            Self::OpenApi3(_) => None,
        }
    }

    /// Unwrap into an OpenAPI 3.x document, or fail with the version found.
    pub fn into_openapi3(self) -> Result<Document> {
        match self {
            Self::OpenApi3(doc) => Ok(doc),
            Self::Swagger2(doc) => Err(unsupported(
                doc.version.map(|v| v.value),
                "3.0, 3.1",
            )),
        }
    }
}

fn unsupported(version: Option<String>, supported: &str) -> OasError {
    OasError::parse(
        "detecting specification version",
        ParseErrorKind::UnsupportedVersion {
            version: version.unwrap_or_else(|| "none".to_string()),
            supported: supported.to_string(),
        },
    )
}

fn build_from_root(root: Arc<Node>, config: &BuildConfig) -> Result<BuiltDocument> {
    if let Some(first) = config.validate().into_iter().next() {
        return Err(OasError::validation(format!("build configuration: {first}")));
    }
    let version = detect_spec_version(&root);
    let built = match version {
        SpecVersion::OpenApi30 | SpecVersion::OpenApi31 => {
            BuiltDocument::OpenApi3(Document::build_from_root(root, config)?)
        }
        SpecVersion::Swagger20 => BuiltDocument::Swagger2(Swagger::build_from_root(root, config)?),
        SpecVersion::Unknown => {
            return Err(unsupported(declared_version(&root), "3.0, 3.1, 2.0"));
        }
    };

    tracing::info!(
        "Built {} document: {} paths, {} references",
        version,
        built.path_count(),
        built.index().reference_count()
    );
    Ok(built)
}

/// Parse and build a document from text.
pub fn build_document_str(content: &str, config: &BuildConfig) -> Result<BuiltDocument> {
    let root = parse_document_str(content)?;
    build_from_root(root, config)
}

/// Read, parse and build a document file.
pub fn build_document(path: &Path, config: &BuildConfig) -> Result<BuiltDocument> {
    tracing::info!("Building document: {:?}", path);
    let root = parse_document(path)?;
    build_from_root(root, config).with_context(|| format!("building {}", path.display()))
}
