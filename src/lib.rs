//! **A library for reading and comparing OpenAPI and Swagger documents.**
//!
//! `oas-tools` turns an OpenAPI 3.0/3.1 or Swagger 2.0 document into a typed
//! object graph in which every value remembers the line and column it came
//! from, resolves `$ref` pointers (including circular ones, when allowed),
//! and compares two versions of a document into a report of what changed
//! and which of those changes break existing clients.
//!
//! ## Core Concepts & Modules
//!
//! - **[`parsers`]**: YAML or JSON text to a position-aware [`model::Node`] tree,
//!   plus version detection.
//! - **[`index`]**: the [`SpecIndex`], which catalogs and resolves references
//!   for one document.
//! - **[`model`]**: reference wrappers, the [`Buildable`] protocol and the
//!   typed objects for each version ([`model::v3`], [`model::v2`]).
//! - **[`diff`]**: the change model and one comparator per object type.
//! - **[`pipeline`]**: the stages above chained together.
//!
//! ## Getting Started: Building a Document
//!
//! ```
//! use oas_tools::{build_document_str, BuildConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let yaml = "openapi: 3.1.0\ninfo:\n  title: Pets\n  version: 1.0.0\npaths:\n  /pets: {}\n";
//!     let built = build_document_str(yaml, &BuildConfig::default())?;
//!
//!     let doc = built.as_openapi3().ok_or("not OpenAPI 3")?;
//!     let title = doc.info.as_ref().and_then(|i| i.value.title.as_ref()).ok_or("no title")?;
//!     println!("'{}' at line {}, {} paths", title.value, title.line(), doc.path_count());
//!     Ok(())
//! }
//! ```
//!
//! ### Comparing Two Versions
//!
//! ```
//! use oas_tools::{compare_documents_str, BuildConfig, Changed};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let old = "openapi: 3.1.0\npaths:\n  /pets: {}\n  /users: {}\n";
//!     let new = "openapi: 3.1.0\npaths:\n  /pets: {}\n";
//!
//!     if let Some(report) = compare_documents_str(old, new, &BuildConfig::default())? {
//!         println!(
//!             "{} changes, {} breaking",
//!             report.total_changes(),
//!             report.total_breaking_changes()
//!         );
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // `left`/`right` and `l`/`r` pairs are clear in comparators
    clippy::similar_names,
    // Comparator helpers take one breaking flag per direction
    clippy::fn_params_excessive_bools,
    clippy::too_many_arguments
)]

pub mod config;
pub mod diff;
pub mod error;
pub mod index;
pub mod model;
pub mod parsers;
pub mod pipeline;

// Re-export main types for convenience
pub use config::{BuildConfig, BuildConfigBuilder, ConfigError, Validatable};
pub use diff::{compare_documents, Change, ChangeType, Changed, DocumentChanges};
pub use error::{ErrorContext, OasError, Result};
pub use index::{DocumentResolver, SpecIndex};
pub use model::{Buildable, KeyReference, Node, NodeReference, ValueReference};
pub use parsers::{parse_document, parse_document_str, SpecVersion};
pub use pipeline::{build_document, build_document_str, compare_documents_str, BuiltDocument};
