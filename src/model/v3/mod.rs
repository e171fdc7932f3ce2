//! OpenAPI 3.0 and 3.1 objects.

mod components;
mod document;
mod link;
mod operation;
mod path_item;
mod paths;
mod response;
mod security;
mod server;

pub use components::Components;
pub use document::Document;
pub use link::Link;
pub use operation::Operation;
pub use path_item::PathItem;
pub use paths::Paths;
pub use response::{Header, Response, Responses};
pub use security::SecurityRequirement;
pub use server::{Server, ServerVariable};
