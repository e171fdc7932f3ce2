//! Document parsers.
//!
//! Turns YAML or JSON text into the position-carrying [`Node`] tree the
//! model is built from, and detects which specification version a tree
//! declares.
//!
//! ## Usage
//!
//! ```no_run
//! use oas_tools::parsers::{detect_spec_version, parse_document, SpecVersion};
//! use std::path::Path;
//!
//! let root = parse_document(Path::new("petstore.yaml")).unwrap();
//! if detect_spec_version(&root) == SpecVersion::OpenApi31 {
//!     println!("root spans from line {}", root.line);
//! }
//! ```

mod detection;
mod yaml;

pub use detection::{declared_version, detect_spec_version, SpecVersion};

use crate::error::{OasError, ParseErrorKind, Result};
use crate::model::Node;
use std::path::Path;
use std::sync::Arc;

/// Maximum document file size (256 MB).
const MAX_DOCUMENT_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Read and parse a document file.
///
/// Returns an error if the file exceeds [`MAX_DOCUMENT_FILE_SIZE`] to
/// prevent OOM.
pub fn parse_document(path: &Path) -> Result<Arc<Node>> {
    let metadata = std::fs::metadata(path).map_err(|e| OasError::io(path, e))?;
    if metadata.len() > MAX_DOCUMENT_FILE_SIZE {
        return Err(OasError::parse(
            format!("reading {}", path.display()),
            ParseErrorKind::InvalidSyntax {
                message: format!(
                    "document is {} MB, exceeding the {} MB limit",
                    metadata.len() / (1024 * 1024),
                    MAX_DOCUMENT_FILE_SIZE / (1024 * 1024),
                ),
                line: 0,
                column: 0,
            },
        ));
    }
    let content = std::fs::read_to_string(path).map_err(|e| OasError::io(path, e))?;
    parse_document_str(&content)
}

/// Parse a document from string content.
pub fn parse_document_str(content: &str) -> Result<Arc<Node>> {
    yaml::parse_tree(content)
}
