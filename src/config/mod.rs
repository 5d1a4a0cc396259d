//! Configuration types for the cart client.
//!
//! # Overview
//!
//! - [`CartConfig`]: immutable settings shared by every request a client makes
//! - [`CartConfigBuilder`]: a builder for constructing [`CartConfig`] instances
//! - [`BaseUrl`], [`ApiPrefix`], [`StoreId`], [`Authorization`]: validated newtypes
//!
//! # Example
//!
//! ```rust
//! use commerce_cart::{CartConfig, BaseUrl, ApiPrefix, StoreId};
//!
//! let config = CartConfig::builder()
//!     .base_url(BaseUrl::new("https://shop.example.com/").unwrap())
//!     .api_prefix(ApiPrefix::new("/jsonapi").unwrap())
//!     .store_id(StoreId::new("STORE_ID").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_url(), "https://shop.example.com/jsonapi");
//! ```

mod newtypes;

pub use newtypes::{ApiPrefix, Authorization, BaseUrl, StoreId};
pub(crate) use newtypes::is_header_value;

use std::sync::Arc;

use crate::auth::{CartToken, RandomTokenGenerator, TokenGenerator};
use crate::error::ConfigError;

/// Configuration for a cart client.
///
/// The cart token is fixed when the configuration is built: either the one
/// supplied to the builder or one produced by its [`TokenGenerator`]. Cloning
/// a config keeps the same token.
///
/// # Thread Safety
///
/// `CartConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct CartConfig {
    base_url: BaseUrl,
    api_prefix: ApiPrefix,
    cart_token: CartToken,
    store_id: Option<StoreId>,
    authorization: Option<Authorization>,
    user_agent_prefix: Option<String>,
}

impl CartConfig {
    /// Creates a configuration with a generated cart token and no optional settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] or [`ConfigError::InvalidApiPrefix`]
    /// if either value fails validation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use commerce_cart::{CartConfig, ConfigError};
    ///
    /// let config = CartConfig::new("https://localhost:8080", "/jsonapi").unwrap();
    /// assert_eq!(config.api_url(), "https://localhost:8080/jsonapi");
    ///
    /// let err = CartConfig::new("https://localhost:8080", "jsonapi").unwrap_err();
    /// assert!(matches!(err, ConfigError::InvalidApiPrefix { .. }));
    /// ```
    pub fn new(base_url: &str, api_prefix: &str) -> Result<Self, ConfigError> {
        Self::builder()
            .base_url(BaseUrl::new(base_url)?)
            .api_prefix(ApiPrefix::new(api_prefix)?)
            .build()
    }

    /// Creates a new builder for constructing a `CartConfig`.
    #[must_use]
    pub fn builder() -> CartConfigBuilder {
        CartConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API prefix.
    #[must_use]
    pub const fn api_prefix(&self) -> &ApiPrefix {
        &self.api_prefix
    }

    /// Returns the base URL joined with the API prefix.
    #[must_use]
    pub fn api_url(&self) -> String {
        format!("{}{}", self.base_url.as_ref(), self.api_prefix.as_ref())
    }

    /// Returns the cart token.
    #[must_use]
    pub const fn cart_token(&self) -> &CartToken {
        &self.cart_token
    }

    /// Returns the store ID, if configured.
    #[must_use]
    pub const fn store_id(&self) -> Option<&StoreId> {
        self.store_id.as_ref()
    }

    /// Returns the authorization credential, if configured.
    #[must_use]
    pub const fn authorization(&self) -> Option<&Authorization> {
        self.authorization.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify CartConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CartConfig>();
};

/// Builder for constructing [`CartConfig`] instances.
///
/// Required fields are `base_url` and `api_prefix`.
///
/// # Defaults
///
/// - `cart_token`: generated once by the token generator
/// - `token_generator`: [`RandomTokenGenerator`]
/// - `store_id`, `authorization`, `user_agent_prefix`: `None`
#[derive(Default)]
pub struct CartConfigBuilder {
    base_url: Option<BaseUrl>,
    api_prefix: Option<ApiPrefix>,
    cart_token: Option<CartToken>,
    token_generator: Option<Arc<dyn TokenGenerator>>,
    store_id: Option<StoreId>,
    authorization: Option<Authorization>,
    user_agent_prefix: Option<String>,
}

impl std::fmt::Debug for CartConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartConfigBuilder")
            .field("base_url", &self.base_url)
            .field("api_prefix", &self.api_prefix)
            .field("cart_token", &self.cart_token)
            .field("token_generator", &self.token_generator.is_some())
            .field("store_id", &self.store_id)
            .field("authorization", &self.authorization)
            .field("user_agent_prefix", &self.user_agent_prefix)
            .finish()
    }
}

impl CartConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API prefix (required).
    #[must_use]
    pub fn api_prefix(mut self, prefix: ApiPrefix) -> Self {
        self.api_prefix = Some(prefix);
        self
    }

    /// Reuses an existing cart token instead of generating one.
    #[must_use]
    pub fn cart_token(mut self, token: CartToken) -> Self {
        self.cart_token = Some(token);
        self
    }

    /// Sets the generator used when no cart token is supplied.
    #[must_use]
    pub fn token_generator(mut self, generator: impl TokenGenerator + 'static) -> Self {
        self.token_generator = Some(Arc::new(generator));
        self
    }

    /// Sets the store ID sent as `Commerce-Current-Store`.
    #[must_use]
    pub fn store_id(mut self, store_id: StoreId) -> Self {
        self.store_id = Some(store_id);
        self
    }

    /// Sets the `Authorization` header value.
    #[must_use]
    pub fn authorization(mut self, authorization: Authorization) -> Self {
        self.authorization = Some(authorization);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`CartConfig`], generating a cart token if none was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or
    /// `api_prefix` are not set.
    pub fn build(self) -> Result<CartConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let api_prefix = self
            .api_prefix
            .ok_or(ConfigError::MissingRequiredField {
                field: "api_prefix",
            })?;

        let cart_token = match (self.cart_token, self.token_generator) {
            (Some(token), _) => token,
            (None, Some(generator)) => CartToken::generate(generator.as_ref()),
            (None, None) => CartToken::generate(&RandomTokenGenerator),
        };

        Ok(CartConfig {
            base_url,
            api_prefix,
            cart_token,
            store_id: self.store_id,
            authorization: self.authorization,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> CartConfigBuilder {
        CartConfig::builder()
            .base_url(BaseUrl::new("https://localhost:8080").unwrap())
            .api_prefix(ApiPrefix::new("/jsonapi").unwrap())
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = CartConfigBuilder::new()
            .api_prefix(ApiPrefix::new("/jsonapi").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_requires_api_prefix() {
        let result = CartConfigBuilder::new()
            .base_url(BaseUrl::new("https://localhost:8080").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "api_prefix"
            })
        ));
    }

    #[test]
    fn test_new_rejects_prefix_without_slash() {
        let err = CartConfig::new("https://localhost:8080", "jsonapi").unwrap_err();
        assert_eq!(
            err.to_string(),
            "api prefix must begin with \"/\" (got 'jsonapi')"
        );
    }

    #[test]
    fn test_api_url_joins_stripped_base_and_prefix() {
        let config = CartConfig::new("https://localhost:8080/", "/jsonapi").unwrap();
        assert_eq!(config.api_url(), "https://localhost:8080/jsonapi");
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = base_builder().build().unwrap();

        assert!(!config.cart_token().as_ref().is_empty());
        assert!(config.store_id().is_none());
        assert!(config.authorization().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_supplied_cart_token_is_kept() {
        let config = base_builder()
            .cart_token(CartToken::new("test_token").unwrap())
            .token_generator(|| "never-used".to_string())
            .build()
            .unwrap();

        assert_eq!(config.cart_token().as_ref(), "test_token");
    }

    #[test]
    fn test_token_generator_is_used_once_at_build() {
        let config = base_builder()
            .token_generator(|| "generated-token".to_string())
            .build()
            .unwrap();

        assert_eq!(config.cart_token().as_ref(), "generated-token");
        let cloned = config.clone();
        assert_eq!(cloned.cart_token(), config.cart_token());
    }

    #[test]
    fn test_independent_configs_get_distinct_tokens() {
        let first = base_builder().build().unwrap();
        let second = base_builder().build().unwrap();
        assert_ne!(first.cart_token(), second.cart_token());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = base_builder()
            .store_id(StoreId::new("STORE_ID").unwrap())
            .authorization(Authorization::new("Bearer abc").unwrap())
            .user_agent_prefix("MyStorefront/1.0")
            .build()
            .unwrap();

        assert_eq!(config.store_id().unwrap().as_ref(), "STORE_ID");
        assert_eq!(config.authorization().unwrap().as_ref(), "Bearer abc");
        assert_eq!(config.user_agent_prefix(), Some("MyStorefront/1.0"));
    }

    #[test]
    fn test_config_debug_masks_secrets() {
        let config = base_builder()
            .cart_token(CartToken::new("secret-cart").unwrap())
            .authorization(Authorization::new("Bearer secret-auth").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("CartConfig"));
        assert!(!debug_str.contains("secret-cart"));
        assert!(!debug_str.contains("secret-auth"));
    }
}
