//! Per-object comparators.
//!
//! Each comparator takes the left and right versions of one object type and
//! returns its typed report, or `None` when nothing changed. Reports nest
//! the same way the objects do, so a document report holds its paths report,
//! which holds path item reports, and so on down.

mod discriminator;
mod document;
mod extensions;
mod info;
mod paths;
mod servers;
mod tags;

pub use discriminator::{compare_discriminator, DiscriminatorChanges};
pub use document::{compare_documents, DocumentChanges};
pub use extensions::{compare_extensions, ExtensionChanges};
pub use info::{
    compare_contact, compare_info, compare_license, ContactChanges, InfoChanges, LicenseChanges,
};
pub use paths::{
    compare_operations, compare_path_items, compare_paths, OperationChanges, PathItemChanges,
    PathsChanges,
};
pub use servers::{compare_servers, ServerChanges, ServerVariableChanges, ServersChanges};
pub use tags::{compare_external_docs, compare_tags, ExternalDocChanges, TagChanges, TagsChanges};
