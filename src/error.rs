//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so an
//! invalid client never gets built. Messages are stable and safe to match on.
//!
//! # Example
//!
//! ```rust
//! use commerce_cart::{ApiPrefix, ConfigError};
//!
//! let result = ApiPrefix::new("jsonapi");
//! assert!(matches!(result, Err(ConfigError::InvalidApiPrefix { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a cart client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API path prefix does not begin with a slash.
    #[error("api prefix must begin with \"/\" (got '{prefix}')")]
    InvalidApiPrefix {
        /// The prefix that was provided.
        prefix: String,
    },

    /// The base URL is empty or lacks an http/https scheme.
    #[error("Invalid base URL '{url}'. Expected an absolute URL such as 'https://shop.example.com'.")]
    InvalidBaseUrl {
        /// The URL that was provided.
        url: String,
    },

    /// A supplied cart token was empty.
    #[error("Cart token cannot be empty. Omit it to have one generated.")]
    EmptyCartToken,

    /// A supplied store ID was empty.
    #[error("Store ID cannot be empty.")]
    EmptyStoreId,

    /// A supplied authorization credential was empty.
    #[error("Authorization credential cannot be empty.")]
    EmptyAuthorization,

    /// A value that is sent as an HTTP header contains characters a header cannot carry.
    #[error("{field} is not a valid HTTP header value")]
    InvalidHeaderValue {
        /// The setting that was rejected.
        field: &'static str,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to initialize HTTP client: {reason}")]
    HttpClientInit {
        /// Why initialization failed.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_api_prefix_message_is_stable() {
        let error = ConfigError::InvalidApiPrefix {
            prefix: "jsonapi".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "api prefix must begin with \"/\" (got 'jsonapi')"
        );
    }

    #[test]
    fn test_invalid_base_url_message_includes_url() {
        let error = ConfigError::InvalidBaseUrl {
            url: "localhost".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("localhost"));
        assert!(message.contains("absolute URL"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "base_url" };
        let message = error.to_string();
        assert!(message.contains("base_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_invalid_header_value_names_field_only() {
        let error = ConfigError::InvalidHeaderValue {
            field: "authorization",
        };
        assert_eq!(
            error.to_string(),
            "authorization is not a valid HTTP header value"
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyCartToken;
        let _: &dyn std::error::Error = &error;
    }
}
