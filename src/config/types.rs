//! Configuration types.

use serde::{Deserialize, Serialize};

/// Options controlling how a document is indexed and built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Tolerate circular references instead of failing the build.
    pub allow_circular_references: bool,
    /// Build independent collection entries (paths, webhooks) in parallel.
    pub concurrent_collections: bool,
    /// Resource name of the document itself. References whose resource part
    /// matches it resolve against the same document.
    pub location: Option<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            allow_circular_references: false,
            concurrent_collections: true,
            location: None,
        }
    }
}

impl BuildConfig {
    /// Create a `BuildConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a `BuildConfig` builder.
    pub fn builder() -> BuildConfigBuilder {
        BuildConfigBuilder::default()
    }
}

/// Builder for constructing `BuildConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct BuildConfigBuilder {
    config: BuildConfig,
}

impl BuildConfigBuilder {
    /// Allow or forbid circular reference resolution.
    pub const fn allow_circular_references(mut self, allow: bool) -> Self {
        self.config.allow_circular_references = allow;
        self
    }

    /// Build collections in parallel or sequentially.
    pub const fn concurrent_collections(mut self, concurrent: bool) -> Self {
        self.config.concurrent_collections = concurrent;
        self
    }

    /// Set the document's own resource name.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.config.location = Some(location.into());
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> BuildConfig {
        self.config
    }
}
