//! Seam for fetching externally referenced documents.

use crate::error::{OasError, Result};
use crate::model::Node;
use std::collections::HashMap;
use std::sync::Arc;

/// Supplies document trees for resources named by cross-document pointers.
///
/// Implementations may block (file or network access). The index calls them
/// at most once per resource and caches the result; concurrent lookups of a
/// resource that is not cached yet wait for that single call.
pub trait DocumentResolver: Send + Sync {
    /// Return the root node of `resource`.
    fn resolve(&self, resource: &str) -> Result<Arc<Node>>;
}

/// Resolver backed by an in-memory map of already parsed documents.
#[derive(Debug, Default, Clone)]
pub struct StaticResolver {
    documents: HashMap<String, Arc<Node>>,
}

impl StaticResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document under `resource`.
    #[must_use]
    pub fn with_document(mut self, resource: impl Into<String>, root: Arc<Node>) -> Self {
        self.documents.insert(resource.into(), root);
        self
    }
}

impl DocumentResolver for StaticResolver {
    fn resolve(&self, resource: &str) -> Result<Arc<Node>> {
        self.documents.get(resource).cloned().ok_or_else(|| {
            OasError::io(
                resource,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such document"),
            )
        })
    }
}
