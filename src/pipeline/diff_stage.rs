//! Comparison stage.

use super::parse::{build_document, build_document_str};
use crate::config::BuildConfig;
use crate::diff::{compare_documents, Changed, DocumentChanges};
use crate::error::{ErrorContext, Result};
use std::path::Path;

/// Build two OpenAPI 3.x documents from text and compare them.
///
/// `Ok(None)` means the documents are semantically identical. Either side
/// failing to build, or declaring anything other than OpenAPI 3.x, is an
/// error.
pub fn compare_documents_str(
    left: &str,
    right: &str,
    config: &BuildConfig,
) -> Result<Option<DocumentChanges>> {
    let left = build_document_str(left, config)
        .and_then(super::BuiltDocument::into_openapi3)
        .context("building left document")?;
    let right = build_document_str(right, config)
        .and_then(super::BuiltDocument::into_openapi3)
        .context("building right document")?;
    Ok(run_comparison(&left, &right))
}

/// Build two OpenAPI 3.x document files and compare them.
pub fn compare_files(
    left: &Path,
    right: &Path,
    config: &BuildConfig,
) -> Result<Option<DocumentChanges>> {
    let left = build_document(left, config)
        .and_then(super::BuiltDocument::into_openapi3)
        .context("building left document")?;
    let right = build_document(right, config)
        .and_then(super::BuiltDocument::into_openapi3)
        .context("building right document")?;
    Ok(run_comparison(&left, &right))
}

fn run_comparison(
    left: &crate::model::v3::Document,
    right: &crate::model::v3::Document,
) -> Option<DocumentChanges> {
    tracing::info!("Computing semantic diff...");
    let report = compare_documents(left, right);
    match &report {
        Some(changes) => tracing::info!(
            "Found {} changes, {} breaking",
            changes.total_changes(),
            changes.total_breaking_changes()
        ),
        None => tracing::info!("No changes found"),
    }
    report
}
