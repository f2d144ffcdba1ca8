//! core
//!
//! Metadata document, encoders, file storage, and the update cycle.

pub mod context;
pub mod encode;
pub mod metadata;
pub mod store;
pub mod update;

pub use context::Context;
pub use metadata::{MetadataDocument, MetadataError};
pub use update::{prepare, Prepared, UpdateError};
