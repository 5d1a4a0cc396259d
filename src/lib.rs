//! # Commerce Cart Rust SDK
//!
//! A Rust client for the JSON:API cart and checkout endpoints of a headless
//! commerce backend.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`CartConfig`] and [`CartConfigBuilder`]
//! - Validated newtypes for the base URL, API prefix, store, and authorization
//! - A per-session cart token sent on every request
//! - An async HTTP client that classifies JSON:API responses and errors
//! - A JSON:API document model with included-set resolution via [`jsonapi`]
//! - Cart and checkout operations via [`CartClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use commerce_cart::{ApiPrefix, BaseUrl, CartConfig, StoreId};
//!
//! let config = CartConfig::builder()
//!     .base_url(BaseUrl::new("https://shop.example.com").unwrap())
//!     .api_prefix(ApiPrefix::new("/jsonapi").unwrap())
//!     .store_id(StoreId::new("1").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_url(), "https://shop.example.com/jsonapi");
//! ```
//!
//! ## Working With a Cart
//!
//! ```rust,ignore
//! use commerce_cart::{CartClient, CartConfig, ResourceIdentifier};
//!
//! let client = CartClient::new(CartConfig::new("https://shop.example.com", "/jsonapi")?)?;
//!
//! // Add a product variation
//! let variation = ResourceIdentifier::new("product-variation--simple", "8ccb12f6");
//! let added = client.add_to_cart(&variation, 1, None, None).await?;
//!
//! // Change its quantity, then remove it
//! let updated = client.update_cart_item(&added.cart_item, 3, None, None).await?;
//! client.remove_cart_item(&updated.cart_item).await?;
//!
//! // Check out
//! let checkout = client.get_checkout(&added.cart.identifier(), None, None).await?;
//! ```
//!
//! ## Errors
//!
//! Failed requests carry a list of JSON:API error objects, whether the
//! server sent them or the client synthesized them for transport failures
//! and non-JSON:API responses:
//!
//! ```rust,ignore
//! match client.get_cart(None, None).await {
//!     Ok(response) => println!("{:?}", response.cart),
//!     Err(e) => for error in e.errors() {
//!         eprintln!("{:?}: {:?}", error.status, error.detail);
//!     },
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Clients are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One request per call**: No retries, caching, or timeouts

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod jsonapi;

// Re-export public types at crate root for convenience
pub use auth::{CartToken, RandomTokenGenerator, TokenGenerator};
pub use config::{ApiPrefix, Authorization, BaseUrl, CartConfig, CartConfigBuilder, StoreId};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, JsonApiErrorKind, JsonApiErrors, RequestOptions,
};

// Re-export cart client types
pub use clients::cart::{
    CartClient, CartError, CartItemResponse, CartResponse, CheckoutResponse,
};

// Re-export JSON:API document types
pub use jsonapi::{Document, ErrorObject, ResourceIdentifier, ResourceObject};
