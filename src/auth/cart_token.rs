//! Cart token handling for anonymous cart sessions.
//!
//! The backend correlates anonymous requests to a server-side cart through the
//! `Commerce-Cart-Token` header. A client either reuses a token it was given or
//! generates one once when its configuration is built; it never regenerates
//! the token afterwards.
//!
//! Token generation goes through the [`TokenGenerator`] trait so callers (and
//! tests) can supply deterministic tokens.
//!
//! # Example
//!
//! ```rust
//! use commerce_cart::auth::{CartToken, RandomTokenGenerator, TokenGenerator};
//!
//! let token = CartToken::generate(&RandomTokenGenerator);
//! assert!(!token.as_ref().is_empty());
//!
//! let fixed = CartToken::new("test_token").unwrap();
//! assert_eq!(fixed.as_ref(), "test_token");
//! ```

use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt;

use crate::config::is_header_value;
use crate::error::ConfigError;

/// HTTP header carrying the cart token.
pub const CART_TOKEN_HEADER: &str = "Commerce-Cart-Token";

/// Produces opaque, URL-safe session tokens.
///
/// Uniqueness is statistical: implementations must make collisions negligible
/// for session scoping, but need not be cryptographically secure.
pub trait TokenGenerator: Send + Sync {
    /// Returns a fresh, non-empty token.
    fn generate(&self) -> String;
}

/// Default [`TokenGenerator`] backed by the thread-local RNG.
///
/// Tokens are lowercase alphanumeric strings of [`RandomTokenGenerator::TOKEN_LENGTH`]
/// characters.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomTokenGenerator;

impl RandomTokenGenerator {
    /// The length of generated tokens.
    pub const TOKEN_LENGTH: usize = 32;
}

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::TOKEN_LENGTH)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect()
    }
}

impl<F> TokenGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}

/// An opaque cart session token.
///
/// The `Debug` implementation masks the value; the token grants access to a
/// cart and should not end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct CartToken(String);

impl CartToken {
    /// Wraps an existing token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCartToken`] if the token is empty, or
    /// [`ConfigError::InvalidHeaderValue`] if it cannot be sent as a header.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyCartToken);
        }
        if !is_header_value(&token) {
            return Err(ConfigError::InvalidHeaderValue { field: "cart token" });
        }
        Ok(Self(token))
    }

    /// Generates a new token with the given generator.
    ///
    /// A generator returning an empty string, or one that cannot be sent as a
    /// header, yields a token from [`RandomTokenGenerator`] instead.
    #[must_use]
    pub fn generate(generator: &dyn TokenGenerator) -> Self {
        Self::new(generator.generate())
            .unwrap_or_else(|_| Self(RandomTokenGenerator.generate()))
    }
}

impl AsRef<str> for CartToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CartToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CartToken(*****)")
    }
}

// Verify CartToken is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CartToken>();
    assert_send_sync::<RandomTokenGenerator>();
};
