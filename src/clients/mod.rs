//! HTTP client types for JSON:API cart backends.
//!
//! This module provides the transport layer and the cart facade on top of it.
//!
//! # Overview
//!
//! - [`HttpClient`]: sends one request and classifies the response
//! - [`HttpRequest`] / [`HttpMethod`]: a request to be sent
//! - [`HttpResponse`]: the raw response and its classification rules
//! - [`RequestOptions`] / [`encode_query`]: JSON:API query parameters
//! - [`JsonApiErrors`] / [`HttpError`]: request failures
//! - [`cart::CartClient`]: cart and checkout operations
//!
//! # Response Classification
//!
//! - **204**: an empty document, regardless of body
//! - **Wrong `Content-Type`**: a `NonJsonApi` error carrying the status, even for 2xx
//! - **2xx**: the parsed document
//! - **Failure with `errors`**: an `Api` error with the server's error objects
//! - **Anything else**: an `Unknown` error carrying the status
//!
//! Transport failures surface as a `Network` error. Nothing is retried.

pub mod cart;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod query;

pub use errors::{
    HttpError, InvalidHttpRequestError, JsonApiErrorKind, JsonApiErrors, CLIENT_ERROR_CODE,
    NON_JSON_API_TITLE, UNKNOWN_ERROR_TITLE, UNPARSEABLE_DOCUMENT_TITLE,
};
pub use http_client::{HttpClient, SDK_VERSION, STORE_HEADER};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use query::{encode_query, Fields, Filters, Page, RequestOptions};

// Re-export cart client types at the clients module level
pub use cart::{CartClient, CartError};
