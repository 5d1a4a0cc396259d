//! JSON:API document types.
//!
//! These types cover the parts of a JSON:API document the client needs to
//! read: primary `data`, the `included` set, and `errors`. Everything the
//! client does not interpret (`attributes`, `meta`, `links`, `jsonapi`) is
//! kept as opaque JSON and passed through unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Identifies one resource within a document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    /// The resource type, e.g. `commerce_order--default`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The resource ID.
    pub id: String,
    /// Non-standard meta information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl ResourceIdentifier {
    /// Creates an identifier without meta.
    #[must_use]
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            meta: None,
        }
    }
}

/// Linkage data of a relationship.
///
/// The JSON shape decides the cardinality: an array is to-many, an object is
/// to-one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    /// A to-many relationship.
    Many(Vec<ResourceIdentifier>),
    /// A to-one relationship.
    One(ResourceIdentifier),
}

/// A named link from one resource to others.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Resource linkage; `None` when absent or `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<RelationshipData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

/// One entity in a JSON:API document (cart, cart item, product variation, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceObject {
    /// The resource type.
    #[serde(rename = "type")]
    pub kind: String,
    /// The resource ID.
    #[serde(default)]
    pub id: String,
    /// Resource attributes, passed through untouched.
    #[serde(default)]
    pub attributes: Map<String, Value>,
    /// Relationships keyed by field name.
    #[serde(default)]
    pub relationships: BTreeMap<String, Relationship>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl ResourceObject {
    /// Returns the (type, id) identifier of this resource.
    #[must_use]
    pub fn identifier(&self) -> ResourceIdentifier {
        ResourceIdentifier::new(self.kind.clone(), self.id.clone())
    }

    /// Returns an attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Returns a relationship by field name.
    #[must_use]
    pub fn relationship(&self, field: &str) -> Option<&Relationship> {
        self.relationships.get(field)
    }

    /// Returns the identifier of a to-one relationship.
    ///
    /// Returns `None` if the field is absent, has no data, or is to-many.
    #[must_use]
    pub fn to_one_identifier(&self, field: &str) -> Option<&ResourceIdentifier> {
        match self.relationship(field)?.data.as_ref()? {
            RelationshipData::One(identifier) => Some(identifier),
            RelationshipData::Many(_) => None,
        }
    }
}

/// Primary data of a document: a single resource or a collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    /// A collection of resources.
    Many(Vec<ResourceObject>),
    /// A single resource.
    One(Box<ResourceObject>),
}

impl PrimaryData {
    /// Returns "the" resource: the single object, or the first element of a collection.
    #[must_use]
    pub fn first(&self) -> Option<&ResourceObject> {
        match self {
            Self::One(resource) => Some(&**resource),
            Self::Many(resources) => resources.first(),
        }
    }

    /// Consumes the data, returning "the" resource.
    #[must_use]
    pub fn into_first(self) -> Option<ResourceObject> {
        match self {
            Self::One(resource) => Some(*resource),
            Self::Many(resources) => resources.into_iter().next(),
        }
    }
}

/// Where in the request an error originated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSource {
    /// JSON pointer into the request document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
    /// The query parameter that caused the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    /// The request header that caused the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

/// One reported failure.
///
/// `id` is kept as raw JSON because servers send it as either a string or a
/// number. `status` and `code` accept numbers too and are stored as strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// HTTP status code, as a string.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
    /// Application-specific error code.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<String>,
    /// Short summary of the problem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Explanation specific to this occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

/// Reads a member that should be a string but is sometimes sent as a number.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(value)) => Some(value),
        Some(other) => Some(other.to_string()),
    })
}

/// The top-level envelope of every response.
///
/// A `204 No Content` response is represented by [`Document::default`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PrimaryData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<ResourceObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonapi: Option<Value>,
}

impl Document {
    /// Returns "the" primary resource, see [`PrimaryData::first`].
    #[must_use]
    pub fn primary_resource(&self) -> Option<&ResourceObject> {
        self.data.as_ref().and_then(PrimaryData::first)
    }

    /// Returns the included set, or an empty slice when absent.
    #[must_use]
    pub fn included(&self) -> &[ResourceObject] {
        self.included.as_deref().unwrap_or_default()
    }
}
