//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated base URL for the commerce backend.
///
/// The URL must carry an `http` or `https` scheme and a host. A single
/// trailing slash is stripped so that the API prefix can be appended as-is.
///
/// # Example
///
/// ```rust
/// use commerce_cart::BaseUrl;
///
/// let url = BaseUrl::new("https://shop.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://shop.example.com");
/// assert_eq!(url.scheme(), "https");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is not an absolute
    /// http(s) URL with a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();
        let url = trimmed.strip_suffix('/').unwrap_or(trimmed).to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let remainder = &url[scheme_end + 3..];
        let host_end = remainder.find([':', '/', '?', '#']).unwrap_or(remainder.len());
        if host_end == 0 {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

/// A validated API path prefix such as `/jsonapi`.
///
/// # Example
///
/// ```rust
/// use commerce_cart::ApiPrefix;
///
/// assert!(ApiPrefix::new("/jsonapi").is_ok());
/// assert!(ApiPrefix::new("jsonapi").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiPrefix(String);

impl ApiPrefix {
    /// Creates a new validated API prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiPrefix`] if the prefix does not begin with `/`.
    pub fn new(prefix: impl Into<String>) -> Result<Self, ConfigError> {
        let prefix = prefix.into();
        if !prefix.starts_with('/') {
            return Err(ConfigError::InvalidApiPrefix { prefix });
        }
        Ok(Self(prefix))
    }
}

impl AsRef<str> for ApiPrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns `true` if `value` can be sent as an HTTP header value.
pub(crate) fn is_header_value(value: &str) -> bool {
    reqwest::header::HeaderValue::from_str(value).is_ok()
}

/// The store a cart belongs to, sent as `Commerce-Current-Store`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreId(String);

impl StoreId {
    /// Creates a new store ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStoreId`] if the ID is empty, or
    /// [`ConfigError::InvalidHeaderValue`] if it cannot be sent as a header.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyStoreId);
        }
        if !is_header_value(&id) {
            return Err(ConfigError::InvalidHeaderValue { field: "store ID" });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for StoreId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An `Authorization` header value (e.g. `Bearer ...`).
///
/// The `Debug` implementation masks the credential so it never ends up in logs.
///
/// ```rust
/// use commerce_cart::Authorization;
///
/// let auth = Authorization::new("Bearer secret").unwrap();
/// assert_eq!(format!("{:?}", auth), "Authorization(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Authorization(String);

impl Authorization {
    /// Creates a new authorization credential.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthorization`] if the value is empty, or
    /// [`ConfigError::InvalidHeaderValue`] if it cannot be sent as a header.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ConfigError::EmptyAuthorization);
        }
        if !is_header_value(&value) {
            return Err(ConfigError::InvalidHeaderValue {
                field: "authorization",
            });
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for Authorization {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Authorization(*****)")
    }
}
