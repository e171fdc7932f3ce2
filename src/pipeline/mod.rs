//! Pipeline orchestration for document operations.
//!
//! Ties the stages together: text → node tree → index → built document,
//! and for comparisons, two built documents → change report.

mod diff_stage;
mod output;
mod parse;

pub use diff_stage::{compare_documents_str, compare_files};
pub use output::{report_to_json, write_output, OutputTarget};
pub use parse::{build_document, build_document_str, BuiltDocument};
