//! Lookup over a document's included set.
//!
//! An [`IncludedIndex`] groups the `included` resources of one response by
//! type and then by ID, so relationships on the primary resource can be
//! resolved to full resource objects. The index borrows from the document
//! and lives only as long as that response is being processed.
//!
//! # Example
//!
//! ```rust
//! use commerce_cart::jsonapi::{resolve_relationship, Document, IncludedIndex, Resolved};
//! use serde_json::json;
//!
//! let doc: Document = serde_json::from_value(json!({
//!     "data": {
//!         "type": "commerce_order_item--default",
//!         "id": "item-1",
//!         "relationships": {
//!             "order_id": {"data": {"type": "commerce_order--default", "id": "cart-1"}}
//!         }
//!     },
//!     "included": [{"type": "commerce_order--default", "id": "cart-1"}]
//! }))
//! .unwrap();
//!
//! let index = IncludedIndex::build(doc.included()).unwrap();
//! let item = doc.primary_resource().unwrap();
//! let cart = resolve_relationship(item, "order_id", &index).unwrap();
//! assert!(matches!(cart, Some(Resolved::One(c)) if c.id == "cart-1"));
//! ```

use std::collections::HashMap;

use thiserror::Error;

use crate::jsonapi::document::{RelationshipData, ResourceIdentifier, ResourceObject};

/// Errors raised while indexing or resolving included resources.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// A relationship points at a resource the response did not include.
    #[error("Resource '{kind}' with id '{id}' is not in the included set")]
    MissingInclude {
        /// The resource type that was looked up.
        kind: String,
        /// The resource ID that was looked up.
        id: String,
    },

    /// The included set holds two different resources with the same type and id.
    #[error("Included set contains conflicting copies of '{kind}' with id '{id}'")]
    ConflictingResource {
        /// The duplicated resource type.
        kind: String,
        /// The duplicated resource ID.
        id: String,
    },
}

/// Included resources grouped by type, then by ID.
#[derive(Clone, Debug, Default)]
pub struct IncludedIndex<'a> {
    by_type: HashMap<&'a str, HashMap<&'a str, &'a ResourceObject>>,
    len: usize,
}

impl<'a> IncludedIndex<'a> {
    /// Builds an index over an included set.
    ///
    /// Exact duplicates are accepted and stored once.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::ConflictingResource`] if two entries share a type
    /// and ID but differ in content.
    pub fn build(included: &'a [ResourceObject]) -> Result<Self, IndexError> {
        let mut index = Self::default();

        for resource in included {
            let by_id = index.by_type.entry(resource.kind.as_str()).or_default();
            match by_id.get(resource.id.as_str()) {
                Some(existing) if *existing == resource => {}
                Some(_) => {
                    return Err(IndexError::ConflictingResource {
                        kind: resource.kind.clone(),
                        id: resource.id.clone(),
                    });
                }
                None => {
                    by_id.insert(resource.id.as_str(), resource);
                    index.len += 1;
                }
            }
        }

        Ok(index)
    }

    /// Looks up a resource by type and ID.
    #[must_use]
    pub fn get(&self, kind: &str, id: &str) -> Option<&'a ResourceObject> {
        self.by_type.get(kind)?.get(id).copied()
    }

    /// Looks up the resource an identifier points at.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::MissingInclude`] if it is not indexed.
    pub fn lookup(&self, identifier: &ResourceIdentifier) -> Result<&'a ResourceObject, IndexError> {
        self.get(&identifier.kind, &identifier.id)
            .ok_or_else(|| IndexError::MissingInclude {
                kind: identifier.kind.clone(),
                id: identifier.id.clone(),
            })
    }

    /// Returns the number of indexed resources.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is indexed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of distinct resource types.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.by_type.len()
    }

    /// Returns the distinct resource types, in no particular order.
    pub fn types(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.by_type.keys().copied()
    }
}

/// The target(s) of a resolved relationship.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolved<'a> {
    /// A to-one relationship.
    One(&'a ResourceObject),
    /// A to-many relationship, in linkage order.
    Many(Vec<&'a ResourceObject>),
}

impl<'a> Resolved<'a> {
    /// Returns the target of a to-one relationship.
    #[must_use]
    pub const fn as_one(&self) -> Option<&'a ResourceObject> {
        match self {
            Self::One(resource) => Some(*resource),
            Self::Many(_) => None,
        }
    }

    /// Returns the targets as a list; a to-one relationship yields one element.
    #[must_use]
    pub fn into_many(self) -> Vec<&'a ResourceObject> {
        match self {
            Self::One(resource) => vec![resource],
            Self::Many(resources) => resources,
        }
    }
}

/// Resolves a named relationship of `resource` against `index`.
///
/// Returns `Ok(None)` when the field is absent or carries no data.
///
/// # Errors
///
/// Returns [`IndexError::MissingInclude`] if any linked identifier is not in
/// the index.
pub fn resolve_relationship<'a>(
    resource: &ResourceObject,
    field: &str,
    index: &IncludedIndex<'a>,
) -> Result<Option<Resolved<'a>>, IndexError> {
    let Some(data) = resource
        .relationship(field)
        .and_then(|relationship| relationship.data.as_ref())
    else {
        return Ok(None);
    };

    let resolved = match data {
        RelationshipData::One(identifier) => Resolved::One(index.lookup(identifier)?),
        RelationshipData::Many(identifiers) => Resolved::Many(
            identifiers
                .iter()
                .map(|identifier| index.lookup(identifier))
                .collect::<Result<_, _>>()?,
        ),
    };

    Ok(Some(resolved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resource(value: serde_json::Value) -> ResourceObject {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_input_builds_empty_index() {
        let index = IncludedIndex::build(&[]).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.type_count(), 0);
    }

    #[test]
    fn test_groups_by_type_then_id() {
        let included = vec![
            resource(json!({"type": "file", "id": "f1"})),
            resource(json!({"type": "file", "id": "f2"})),
            resource(json!({"type": "taxonomy_term--brands", "id": "b1"})),
        ];
        let index = IncludedIndex::build(&included).unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.type_count(), 2);
        assert_eq!(index.get("file", "f2").unwrap().id, "f2");
        assert!(index.get("file", "b1").is_none());
    }

    #[test]
    fn test_identical_duplicates_are_accepted() {
        let copy = resource(json!({"type": "file", "id": "f1", "attributes": {"uri": "a.png"}}));
        let included = vec![copy.clone(), copy];
        let index = IncludedIndex::build(&included).unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_conflicting_duplicates_are_rejected() {
        let included = vec![
            resource(json!({"type": "file", "id": "f1", "attributes": {"uri": "a.png"}})),
            resource(json!({"type": "file", "id": "f1", "attributes": {"uri": "b.png"}})),
        ];
        let err = IncludedIndex::build(&included).unwrap_err();
        assert_eq!(
            err,
            IndexError::ConflictingResource {
                kind: "file".to_string(),
                id: "f1".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_absent_field_or_data_is_none() {
        let item = resource(json!({
            "type": "commerce_order_item--default",
            "id": "i1",
            "relationships": {"order_id": {"data": null}}
        }));
        let index = IncludedIndex::default();

        assert_eq!(resolve_relationship(&item, "order_id", &index).unwrap(), None);
        assert_eq!(resolve_relationship(&item, "nope", &index).unwrap(), None);
    }

    #[test]
    fn test_resolve_missing_include_is_an_error() {
        let item = resource(json!({
            "type": "commerce_order_item--default",
            "id": "i1",
            "relationships": {
                "order_id": {"data": {"type": "commerce_order--default", "id": "c1"}}
            }
        }));
        let index = IncludedIndex::default();

        let err = resolve_relationship(&item, "order_id", &index).unwrap_err();
        assert!(matches!(err, IndexError::MissingInclude { ref id, .. } if id == "c1"));
    }

    #[test]
    fn test_resolve_to_many_with_one_missing_fails_whole_lookup() {
        let included = vec![resource(json!({"type": "file", "id": "f1"}))];
        let index = IncludedIndex::build(&included).unwrap();
        let product = resource(json!({
            "type": "product--default",
            "id": "p1",
            "relationships": {
                "images": {"data": [{"type": "file", "id": "f1"}, {"type": "file", "id": "f2"}]}
            }
        }));

        assert!(resolve_relationship(&product, "images", &index).is_err());
    }

    #[test]
    fn test_resolved_helpers() {
        let included = vec![resource(json!({"type": "file", "id": "f1"}))];
        let index = IncludedIndex::build(&included).unwrap();
        let target = index.get("file", "f1").unwrap();

        assert_eq!(Resolved::One(target).as_one(), Some(target));
        assert_eq!(Resolved::One(target).into_many(), vec![target]);
        assert_eq!(Resolved::Many(vec![target]).as_one(), None);
    }
}
