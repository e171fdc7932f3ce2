//! Semantic diff engine for built documents.
//!
//! Two versions of the same object are compared field by field. Every
//! difference becomes a [`Change`] that keeps the source nodes of both
//! sides, so it can be reported with its line and column, and carries a
//! breaking flag decided by the field it was found in.
//!
//! # Architecture
//!
//! - [`result`]: the change model ([`Change`], [`ChangeType`], [`PropertyChanges`])
//! - [`Changed`]: totals over nested reports
//! - [`checks`]: the shared building blocks (scalar checks, keyed maps)
//! - [`changes`]: one comparator per object type
//!
//! # Example
//!
//! ```
//! use oas_tools::config::BuildConfig;
//! use oas_tools::diff::{compare_documents, Changed};
//! use oas_tools::model::v3::Document;
//! use oas_tools::parsers::parse_document_str;
//!
//! let build = |yaml: &str| {
//!     let root = parse_document_str(yaml).unwrap();
//!     Document::build_from_root(root, &BuildConfig::default()).unwrap()
//! };
//! let left = build("openapi: 3.1.0\ninfo:\n  title: Pets\n  version: 1.0.0\n");
//! let right = build("openapi: 3.1.0\ninfo:\n  title: Pets\n  version: 2.0.0\n");
//!
//! let report = compare_documents(&left, &right).unwrap();
//! assert_eq!(report.total_changes(), 1);
//! assert_eq!(report.total_breaking_changes(), 0);
//! ```

pub mod changes;
pub mod checks;
pub mod result;
mod traits;

pub use changes::*;
pub use result::{Change, ChangeType, Position, PropertyChanges};
pub use traits::{count_breaking_changes, Changed};
