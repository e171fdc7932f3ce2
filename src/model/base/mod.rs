//! Objects shared by Swagger 2.0 and OpenAPI 3.x.

mod contact;
mod discriminator;
mod external_doc;
mod info;
mod license;
mod tag;

pub use contact::Contact;
pub use discriminator::Discriminator;
pub use external_doc::ExternalDoc;
pub use info::Info;
pub use license::License;
pub use tag::Tag;
