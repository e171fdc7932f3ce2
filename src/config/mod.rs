//! Configuration for building document models.
//!
//! # Quick Start
//!
//! ```rust
//! use oas_tools::config::BuildConfig;
//!
//! let config = BuildConfig::builder()
//!     .allow_circular_references(true)
//!     .location("petstore.yaml")
//!     .build();
//! assert!(config.allow_circular_references);
//! ```
//!
//! # Configuration File
//!
//! ```yaml
//! allow_circular_references: true
//! concurrent_collections: false
//! location: petstore.yaml
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{BuildConfig, BuildConfigBuilder};
pub use validation::{ConfigError, Validatable};
