//! HTTP response classification.
//!
//! [`HttpResponse`] holds what came back from the transport; its
//! [`into_document`](HttpResponse::into_document) decides whether that is a
//! usable JSON:API document or one of the failure kinds in
//! [`JsonApiErrors`]. The decision is pure, so it is tested here without a
//! server.

use std::collections::HashMap;

use crate::clients::errors::JsonApiErrors;
use crate::jsonapi::{Document, JSON_API_MEDIA_TYPE};

/// A raw response from the cart API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercase names (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The unparsed response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, by lowercase name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns `true` if the content type is exactly the JSON:API media type.
    #[must_use]
    pub fn is_json_api(&self) -> bool {
        self.content_type() == Some(JSON_API_MEDIA_TYPE)
    }

    /// Classifies the response.
    ///
    /// 1. `204 No Content` is an empty document; the body is not read.
    /// 2. Any other response must be `application/vnd.api+json`, whatever its status.
    /// 3. A 2xx body is returned as a parsed document.
    /// 4. A failure with an `errors` array becomes an API error list.
    /// 5. Any other failure is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`JsonApiErrors`] for every case but 1 and 3.
    pub fn into_document(self) -> Result<Document, JsonApiErrors> {
        if self.code == 204 {
            return Ok(Document::default());
        }

        if !self.is_json_api() {
            return Err(JsonApiErrors::non_json_api(self.code));
        }

        let document: Document = serde_json::from_str(&self.body)
            .map_err(|_| JsonApiErrors::unparseable(self.code))?;

        if self.is_ok() {
            return Ok(document);
        }

        Err(JsonApiErrors::from_document(document)
            .unwrap_or_else(|| JsonApiErrors::unknown(self.code)))
    }
}
