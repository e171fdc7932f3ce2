//! Report serialization and output.

use crate::diff::DocumentChanges;
use crate::error::{OasError, ReportErrorKind, Result};
use std::path::PathBuf;

/// Target for output - either stdout or a file
#[derive(Debug, Clone)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

/// Serialize a change report as pretty-printed JSON.
///
/// Changes carry line and column positions for both sides instead of the
/// source nodes themselves.
pub fn report_to_json(report: &DocumentChanges) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| {
        OasError::report(
            "serializing change report",
            ReportErrorKind::JsonSerializationError(e.to_string()),
        )
    })
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content).map_err(|e| OasError::io(path, e))?;
            tracing::info!("Report written to {:?}", path);
            Ok(())
        }
    }
}
