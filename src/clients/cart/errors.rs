//! Cart-specific error types.
//!
//! - [`CartError::Http`]: the request itself failed
//! - [`CartError::Index`]: the response's included set could not be resolved
//! - [`CartError::UnexpectedDataFormat`]: a successful response had no usable `data`
//! - [`CartError::MissingRelationship`]: a resource lacks the relationship an operation needs
//! - [`CartError::UnexpectedCardinality`]: a to-one relationship came back as to-many

use thiserror::Error;

use crate::clients::{HttpError, InvalidHttpRequestError};
use crate::jsonapi::{ErrorObject, IndexError};

/// Error type for cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Included resources could not be resolved.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// A successful response did not contain the expected primary data.
    #[error("unexpected data format in response from {path}")]
    UnexpectedDataFormat {
        /// The request path that produced the response.
        path: String,
    },

    /// A resource is missing a to-one relationship.
    #[error("resource '{kind}' with id '{id}' has no '{field}' relationship")]
    MissingRelationship {
        /// The resource type.
        kind: String,
        /// The resource ID.
        id: String,
        /// The relationship field.
        field: &'static str,
    },

    /// A relationship expected to be to-one was to-many.
    #[error("relationship '{field}' is to-many, expected to-one")]
    UnexpectedCardinality {
        /// The relationship field.
        field: &'static str,
    },
}

impl From<InvalidHttpRequestError> for CartError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}

impl CartError {
    /// Returns the error objects reported for a failed request.
    ///
    /// Empty for failures that happened after a successful response.
    #[must_use]
    pub fn errors(&self) -> &[ErrorObject] {
        match self {
            Self::Http(e) => e.errors(),
            _ => &[],
        }
    }
}
