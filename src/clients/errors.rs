//! HTTP-level error types for the cart client.
//!
//! Every failure of a request surfaces as [`JsonApiErrors`]: a kind plus the
//! list of [`ErrorObject`]s describing it, so callers can always inspect
//! individual `status`/`detail` fields.
//!
//! - [`JsonApiErrorKind::Network`]: the transport failed (DNS, refused connection, ...)
//! - [`JsonApiErrorKind::NonJsonApi`]: the response was not framed as JSON:API
//! - [`JsonApiErrorKind::Api`]: the server returned a JSON:API `errors` array
//! - [`JsonApiErrorKind::Unknown`]: a failure status without an `errors` array
//!
//! # Example
//!
//! ```rust,ignore
//! use commerce_cart::clients::{HttpError, JsonApiErrorKind};
//!
//! match client.request(request).await {
//!     Ok(document) => println!("{:?}", document.data),
//!     Err(HttpError::JsonApi(e)) if e.kind() == JsonApiErrorKind::Api => {
//!         for error in e.errors() {
//!             println!("{:?}: {:?}", error.status, error.detail);
//!         }
//!     }
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::jsonapi::{Document, ErrorObject};

/// Code used for failures the client synthesizes itself.
pub const CLIENT_ERROR_CODE: &str = "000";

/// Title used when a response is not JSON:API framed.
pub const NON_JSON_API_TITLE: &str = "response did not return JSON:API";

/// Title used for failure responses without an `errors` array.
pub const UNKNOWN_ERROR_TITLE: &str = "unknown error";

/// Title used when a JSON:API response body cannot be parsed.
pub const UNPARSEABLE_DOCUMENT_TITLE: &str = "unable to parse JSON:API document";

/// Classification of a failed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonApiErrorKind {
    /// Transport-level failure; no response was received.
    Network,
    /// The response did not carry the JSON:API content type.
    NonJsonApi,
    /// The server reported errors in a JSON:API error document.
    Api,
    /// A failure without server-provided error objects.
    Unknown,
}

impl fmt::Display for JsonApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => write!(f, "network failure"),
            Self::NonJsonApi => write!(f, "non JSON:API response"),
            Self::Api => write!(f, "API error"),
            Self::Unknown => write!(f, "unknown failure"),
        }
    }
}

/// One or more errors describing a failed request.
///
/// Server-provided error objects are preserved exactly as received.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{kind}: {}", summarize(.errors))]
pub struct JsonApiErrors {
    kind: JsonApiErrorKind,
    errors: Vec<ErrorObject>,
}

impl JsonApiErrors {
    /// Creates an error from a kind and error objects.
    #[must_use]
    pub const fn new(kind: JsonApiErrorKind, errors: Vec<ErrorObject>) -> Self {
        Self { kind, errors }
    }

    /// A transport failure, titled with the underlying message.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(
            JsonApiErrorKind::Network,
            vec![ErrorObject {
                code: Some(CLIENT_ERROR_CODE.to_string()),
                title: Some(message.into()),
                ..ErrorObject::default()
            }],
        )
    }

    /// A response that was not JSON:API framed.
    #[must_use]
    pub fn non_json_api(status: u16) -> Self {
        Self::new(
            JsonApiErrorKind::NonJsonApi,
            vec![ErrorObject {
                code: Some(CLIENT_ERROR_CODE.to_string()),
                status: Some(status.to_string()),
                title: Some(NON_JSON_API_TITLE.to_string()),
                ..ErrorObject::default()
            }],
        )
    }

    /// A failure status without an `errors` array.
    #[must_use]
    pub fn unknown(status: u16) -> Self {
        Self::unknown_with_title(status, UNKNOWN_ERROR_TITLE)
    }

    /// A JSON:API response whose body could not be parsed.
    #[must_use]
    pub fn unparseable(status: u16) -> Self {
        Self::unknown_with_title(status, UNPARSEABLE_DOCUMENT_TITLE)
    }

    fn unknown_with_title(status: u16, title: &str) -> Self {
        Self::new(
            JsonApiErrorKind::Unknown,
            vec![ErrorObject {
                code: Some(CLIENT_ERROR_CODE.to_string()),
                status: Some(status.to_string()),
                title: Some(title.to_string()),
                ..ErrorObject::default()
            }],
        )
    }

    /// Takes the `errors` array out of an error document.
    ///
    /// Returns `None` if the document has no `errors` member.
    #[must_use]
    pub fn from_document(document: Document) -> Option<Self> {
        document
            .errors
            .map(|errors| Self::new(JsonApiErrorKind::Api, errors))
    }

    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> JsonApiErrorKind {
        self.kind
    }

    /// Returns every error object.
    #[must_use]
    pub fn errors(&self) -> &[ErrorObject] {
        &self.errors
    }

    /// Returns the first error object, if any.
    #[must_use]
    pub fn first(&self) -> Option<&ErrorObject> {
        self.errors.first()
    }

    /// Consumes the error, returning its error objects.
    #[must_use]
    pub fn into_errors(self) -> Vec<ErrorObject> {
        self.errors
    }
}

fn summarize(errors: &[ErrorObject]) -> String {
    let Some(first) = errors.first() else {
        return "no error details".to_string();
    };
    let mut summary = first
        .title
        .as_deref()
        .or(first.detail.as_deref())
        .or(first.code.as_deref())
        .unwrap_or("no error details")
        .to_string();
    if let Some(status) = &first.status {
        summary = format!("{summary} (status {status})");
    }
    if errors.len() > 1 {
        summary = format!("{summary} and {} more", errors.len() - 1);
    }
    summary
}

/// Error returned when a request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PATCH request was built without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request body is not a JSON object.
    #[error("Request body must be a JSON object.")]
    NonObjectBody,
}

/// Unified error type for HTTP requests.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request failed; see [`JsonApiErrors::kind`].
    #[error(transparent)]
    JsonApi(#[from] JsonApiErrors),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl HttpError {
    /// Returns the error objects describing the failure.
    ///
    /// Invalid requests were never sent and carry none.
    #[must_use]
    pub fn errors(&self) -> &[ErrorObject] {
        match self {
            Self::JsonApi(e) => e.errors(),
            Self::InvalidRequest(_) => &[],
        }
    }

    /// Returns the classification of a failed request, if it was sent.
    #[must_use]
    pub const fn kind(&self) -> Option<JsonApiErrorKind> {
        match self {
            Self::JsonApi(e) => Some(e.kind()),
            Self::InvalidRequest(_) => None,
        }
    }
}
