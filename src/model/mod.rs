//! Position-aware object model for OpenAPI and Swagger documents.
//!
//! The generic [`Node`] tree comes from the parser. Typed objects are built
//! from it through the [`Buildable`] protocol, and every field keeps the
//! node it was decoded from in a [`NodeReference`], [`ValueReference`] or
//! [`KeyReference`] wrapper, so any value can be traced back to its line
//! and column.
//!
//! - [`base`]: objects shared by every version (info, license, tags, ...)
//! - [`v3`]: OpenAPI 3.0 and 3.1
//! - [`v2`]: Swagger 2.0

pub mod base;
mod collection;
mod decode;
mod extract;
pub mod labels;
mod node;
mod reference;
pub mod v2;
pub mod v3;

pub use collection::build_collection;
pub use decode::{decode_any, NodeDecode};
pub use extract::{
    build_object, extract_any, extract_array, extract_extensions, extract_field, extract_map,
    extract_object, extract_scalar_array, extract_scalar_map, extract_string_array,
    extract_string_map, Buildable,
};
pub use node::{resolve_alias, Node, NodeKind, Tag, EXTENSION_PREFIX, REF_LABEL};
pub use reference::{
    find_item_in_map, Extensions, HasExtensions, KeyReference, NodeReference, ReferenceMap,
    ValueReference,
};
pub(crate) use extract::{build_referenced, decode_sequence};
pub(crate) use reference::value_node;
