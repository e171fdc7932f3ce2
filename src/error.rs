//! Unified error types for oas-tools.
//!
//! Every error that points back into the source document carries the line
//! and column of the offending node, so a failed build can always be traced
//! to the text that caused it.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for oas-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OasError {
    /// Errors turning text into a document tree
    #[error("Failed to parse document: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors while building the object graph from a document tree
    #[error("Failed to build model: {context}")]
    Build {
        context: String,
        #[source]
        source: BuildErrorKind,
    },

    /// Errors while resolving reference pointers
    #[error("Reference resolution failed: {context}")]
    Resolve {
        context: String,
        #[source]
        source: ResolveErrorKind,
    },

    /// Errors while producing a change report
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid YAML/JSON at line {line}, column {column}: {message}")]
    InvalidSyntax {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Document is empty")]
    EmptyDocument,

    #[error("Alias #{anchor_id} at line {line}, column {column} refers to an unfinished anchor")]
    UnknownAlias {
        anchor_id: usize,
        line: usize,
        column: usize,
    },

    #[error("Unsupported specification version: {version} (supported: {supported})")]
    UnsupportedVersion { version: String, supported: String },
}

/// Specific model build error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BuildErrorKind {
    #[error("Invalid value for '{field}' at line {line}, column {column}: expected {expected}")]
    InvalidValue {
        field: String,
        expected: &'static str,
        line: usize,
        column: usize,
    },

    #[error("Invalid structure for '{field}' at line {line}, column {column}: expected {expected}")]
    InvalidStructure {
        field: String,
        expected: &'static str,
        line: usize,
        column: usize,
    },
}

/// Specific reference resolution error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ResolveErrorKind {
    #[error("Reference '{reference}' at line {line}, column {column} was not found")]
    NotFound {
        reference: String,
        line: usize,
        column: usize,
    },

    #[error("Circular reference '{journey}' found during lookup at line {line}, column {column}, it cannot be resolved")]
    Circular {
        journey: String,
        line: usize,
        column: usize,
    },

    #[error("Malformed reference '{reference}' at line {line}, column {column}: {reason}")]
    Malformed {
        reference: String,
        reason: String,
        line: usize,
        column: usize,
    },

    #[error("Reference '{reference}' at line {line}, column {column} points into '{resource}', which is unavailable: {reason}")]
    RemoteUnavailable {
        resource: String,
        reference: String,
        reason: String,
        line: usize,
        column: usize,
    },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for oas-tools operations
pub type Result<T> = std::result::Result<T, OasError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl OasError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a build error with context
    pub fn build(context: impl Into<String>, source: BuildErrorKind) -> Self {
        Self::Build {
            context: context.into(),
            source,
        }
    }

    /// Create a resolution error with context
    pub fn resolve(context: impl Into<String>, source: ResolveErrorKind) -> Self {
        Self::Resolve {
            context: context.into(),
            source,
        }
    }

    /// Create a build error for a field whose value has the wrong type
    pub fn invalid_value(
        field: impl Into<String>,
        expected: &'static str,
        line: usize,
        column: usize,
    ) -> Self {
        let field = field.into();
        Self::build(
            format!("decoding '{field}'"),
            BuildErrorKind::InvalidValue {
                field,
                expected,
                line,
                column,
            },
        )
    }

    /// Create a build error for a node with the wrong shape
    pub fn invalid_structure(
        field: impl Into<String>,
        expected: &'static str,
        line: usize,
        column: usize,
    ) -> Self {
        let field = field.into();
        Self::build(
            format!("building '{field}'"),
            BuildErrorKind::InvalidStructure {
                field,
                expected,
                line,
                column,
            },
        )
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error reports a circular reference.
    ///
    /// Circular references are only fatal when the index forbids them, so
    /// callers sometimes need to tell them apart from other failures.
    #[must_use]
    pub const fn is_circular_reference(&self) -> bool {
        matches!(
            self,
            Self::Resolve {
                source: ResolveErrorKind::Circular { .. },
                ..
            }
        )
    }

    /// Whether this error reports a reference that could not be found,
    /// including one into a remote document that could not be fetched.
    #[must_use]
    pub const fn is_reference_not_found(&self) -> bool {
        matches!(
            self,
            Self::Resolve {
                source: ResolveErrorKind::NotFound { .. } | ResolveErrorKind::RemoteUnavailable { .. },
                ..
            }
        )
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for OasError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain rather than replace, so an error raised deep inside
/// a path item reads like `building path item '/pets': building 'get': ...`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<OasError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: OasError, new_ctx: &str) -> OasError {
    match err {
        OasError::Parse {
            context: existing,
            source,
        } => OasError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        OasError::Build {
            context: existing,
            source,
        } => OasError::Build {
            context: chain_context(new_ctx, &existing),
            source,
        },
        OasError::Resolve {
            context: existing,
            source,
        } => OasError::Resolve {
            context: chain_context(new_ctx, &existing),
            source,
        },
        OasError::Report {
            context: existing,
            source,
        } => OasError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        OasError::Io {
            path,
            message,
            source,
        } => OasError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        OasError::Config(msg) => OasError::Config(chain_context(new_ctx, &msg)),
        OasError::Validation(msg) => OasError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
