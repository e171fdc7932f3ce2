//! Swagger 2.0 objects.

mod header;
mod operation;
mod paths;
mod security;
mod swagger;

pub use header::{Constraints, Header, Items};
pub use operation::Operation;
pub use paths::{PathItem, Paths};
pub use security::{Scopes, SecurityScheme};
pub use swagger::Swagger;

/// Security requirements have the same shape in every version.
pub use super::v3::SecurityRequirement;
