//! Cart and checkout operations.
//!
//! [`CartClient`] is built on top of [`HttpClient`](crate::clients::HttpClient)
//! and exposes one method per storefront cart endpoint:
//!
//! | Method | Request |
//! |--------|---------|
//! | [`CartClient::get_entrypoint`] | `GET /` |
//! | [`CartClient::get_cart`] | `GET /carts` |
//! | [`CartClient::add_to_cart`] | `POST /cart/add` |
//! | [`CartClient::update_cart_item`] | `PATCH /carts/{cart}/items/{item}` |
//! | [`CartClient::remove_cart_item`] | `DELETE /carts/{cart}/items` |
//! | [`CartClient::apply_promotional_code`] | `PATCH /carts/{cart}/coupons` |
//! | [`CartClient::get_checkout`] | `GET /checkout/{cart}` |
//! | [`CartClient::patch_checkout`] | `PATCH /checkout/{cart}` |
//!
//! # Example
//!
//! ```rust,ignore
//! use commerce_cart::{CartClient, CartConfig};
//!
//! let client = CartClient::new(CartConfig::new("https://shop.example.com", "/jsonapi")?)?;
//!
//! let response = client.get_cart(None, None).await?;
//! match response.cart {
//!     Some(cart) => println!("cart {} with {} included", cart.id, response.included.len()),
//!     None => println!("no cart yet"),
//! }
//! ```

mod client;
mod errors;

pub use client::{
    CartClient, CartItemResponse, CartResponse, CheckoutResponse, CART_INCLUDES,
    CART_ITEM_INCLUDES,
};
pub use errors::CartError;
