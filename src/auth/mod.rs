//! Session identity for anonymous cart access.
//!
//! - [`CartToken`]: the opaque token sent as `Commerce-Cart-Token`
//! - [`TokenGenerator`]: pluggable token source
//! - [`RandomTokenGenerator`]: the default, RNG-backed generator

mod cart_token;

pub use cart_token::{CartToken, RandomTokenGenerator, TokenGenerator, CART_TOKEN_HEADER};
