//! HTTP client for JSON:API cart endpoints.
//!
//! This module provides the [`HttpClient`] type, which performs exactly one
//! round trip per call: it resolves the URL, attaches identity and content
//! negotiation headers, sends the request, and classifies the response.

use std::collections::HashMap;

use crate::auth::CART_TOKEN_HEADER;
use crate::clients::errors::{HttpError, JsonApiErrors};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::query::{encode_query, RequestOptions};
use crate::config::CartConfig;
use crate::error::ConfigError;
use crate::jsonapi::{Document, JSON_API_MEDIA_TYPE};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP header carrying the current store.
pub const STORE_HEADER: &str = "Commerce-Current-Store";

/// HTTP client for making requests to a JSON:API cart backend.
///
/// The client handles:
/// - URL construction from the base URL, API prefix, and query options
/// - Default headers: `Accept`, `Commerce-Cart-Token`, and, when configured,
///   `Commerce-Current-Store` and `Authorization`
/// - `Content-Type: application/vnd.api+json` on POST, PATCH, and DELETE
/// - Response classification via [`HttpResponse::into_document`]
///
/// There is no retry, timeout, or caching; wrap calls externally if needed.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`; requests share only the immutable configuration.
///
/// # Example
///
/// ```rust,ignore
/// use commerce_cart::{CartConfig, HttpClient, HttpMethod, HttpRequest};
///
/// let config = CartConfig::new("https://shop.example.com", "/jsonapi")?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/").build()?;
/// let entrypoint = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL joined with the API prefix (e.g. `https://shop.example.com/jsonapi`).
    api_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the underlying reqwest
    /// client cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &CartConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}commerce-cart-rust v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), JSON_API_MEDIA_TYPE.to_string());
        default_headers.insert(
            CART_TOKEN_HEADER.to_string(),
            config.cart_token().as_ref().to_string(),
        );

        if let Some(store_id) = config.store_id() {
            default_headers.insert(STORE_HEADER.to_string(), store_id.as_ref().to_string());
        }

        if let Some(authorization) = config.authorization() {
            default_headers.insert(
                "Authorization".to_string(),
                authorization.as_ref().to_string(),
            );
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::HttpClientInit {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_url: config.api_url(),
            default_headers,
        })
    }

    /// Returns the API URL requests are resolved against.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves the URL a request will be sent to.
    ///
    /// Absolute URLs are used verbatim; anything else is appended to the API
    /// URL together with the encoded query options.
    #[must_use]
    pub fn resolve_url(&self, request: &HttpRequest) -> String {
        if request.is_absolute() {
            return request.path.clone();
        }
        format!(
            "{}{}{}",
            self.api_url,
            request.path,
            encode_query(request.options.as_ref())
        )
    }

    /// Returns the headers sent for a request.
    #[must_use]
    pub fn request_headers(&self, method: HttpMethod) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();
        if method.is_mutating() {
            headers.insert("Content-Type".to_string(), JSON_API_MEDIA_TYPE.to_string());
        }
        headers
    }

    /// Sends a request and returns the response document.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The transport fails (`JsonApi` with kind `Network`)
    /// - The response is not JSON:API framed (`JsonApi` with kind `NonJsonApi`)
    /// - The server reports errors (`JsonApi` with kind `Api`)
    /// - A failure status carries no error objects (`JsonApi` with kind `Unknown`)
    pub async fn request(&self, request: HttpRequest) -> Result<Document, HttpError> {
        request.verify()?;

        let url = self.resolve_url(&request);
        let headers = self.request_headers(request.http_method);

        let mut req_builder = self
            .client
            .request(request.http_method.as_reqwest(), url.as_str());

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, url = %url, "sending JSON:API request");

        let res = req_builder
            .send()
            .await
            .map_err(|e| JsonApiErrors::network(e.to_string()))?;

        let code = res.status().as_u16();
        tracing::debug!(status = code, url = %url, "received JSON:API response");

        let res_headers = Self::parse_response_headers(res.headers());
        let body = if code == 204 {
            String::new()
        } else {
            res.text()
                .await
                .map_err(|e| JsonApiErrors::network(e.to_string()))?
        };

        HttpResponse::new(code, res_headers, body)
            .into_document()
            .map_err(HttpError::from)
    }

    /// Sends a GET request for `path` with optional query options.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<Document, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .maybe_options(options)
            .build()?;
        self.request(request).await
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
