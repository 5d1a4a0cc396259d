//! HTTP request types for the cart client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests against a JSON:API backend.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::query::RequestOptions;

/// HTTP methods used by the cart API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PATCH method for updating resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for methods that send a JSON:API body.
    #[must_use]
    pub const fn is_mutating(self) -> bool {
        matches!(self, Self::Post | Self::Patch | Self::Delete)
    }

    /// Returns the matching reqwest method.
    #[must_use]
    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent to the cart API.
///
/// `path` is either relative to the client's API URL (`/carts`) or an
/// absolute URL, which is used verbatim.
///
/// # Example
///
/// ```rust
/// use commerce_cart::clients::{HttpMethod, HttpRequest, RequestOptions};
/// use serde_json::json;
///
/// let get = HttpRequest::builder(HttpMethod::Get, "/carts")
///     .options(RequestOptions::new().includes(["order_items"]))
///     .build()
///     .unwrap();
///
/// let patch = HttpRequest::builder(HttpMethod::Patch, "/carts/1/items/2")
///     .body(json!({"data": {"type": "commerce_order_item--default", "id": "2"}}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path or absolute URL for this request.
    pub path: String,
    /// JSON:API query options.
    pub options: Option<RequestOptions>,
    /// The request body, if any.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Returns `true` if `path` is an absolute URL.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.path.starts_with("http://") || self.path.starts_with("https://")
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `http_method` is `Post` or `Patch` but `body` is `None`
    /// - `body` is present but is not a JSON object
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Patch) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        if self.body.as_ref().is_some_and(|body| !body.is_object()) {
            return Err(InvalidHttpRequestError::NonObjectBody);
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    options: Option<RequestOptions>,
    body: Option<serde_json::Value>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            options: None,
            body: None,
        }
    }

    /// Sets the JSON:API query options.
    #[must_use]
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Sets the JSON:API query options if present.
    #[must_use]
    pub fn maybe_options(mut self, options: Option<RequestOptions>) -> Self {
        self.options = options;
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            options: self.options,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}
