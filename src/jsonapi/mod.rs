//! JSON:API document model and included-set resolution.
//!
//! - [`Document`]: the top-level envelope (`data`, `included`, `errors`, ...)
//! - [`ResourceObject`], [`ResourceIdentifier`], [`Relationship`]: resource graph pieces
//! - [`ErrorObject`]: one entry of an `errors` array
//! - [`IncludedIndex`] and [`resolve_relationship`]: relationship lookup

mod document;
mod index;

pub use document::{
    Document, ErrorObject, ErrorSource, PrimaryData, Relationship, RelationshipData,
    ResourceIdentifier, ResourceObject,
};
pub use index::{resolve_relationship, IncludedIndex, IndexError, Resolved};

/// Media type of JSON:API documents.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";
