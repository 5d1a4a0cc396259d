//! Cart and checkout client.
//!
//! [`CartClient`] wraps an [`HttpClient`] with one method per cart/checkout
//! endpoint. Each method performs a single request and, where the caller
//! needs more than the raw document, resolves the relevant resources out of
//! the response's included set.

use serde_json::{json, Map, Value};

use crate::auth::CartToken;
use crate::clients::cart::CartError;
use crate::clients::{Fields, HttpClient, HttpMethod, HttpRequest, RequestOptions};
use crate::config::{CartConfig, StoreId};
use crate::error::ConfigError;
use crate::jsonapi::{
    resolve_relationship, Document, IncludedIndex, IndexError, PrimaryData, Resolved,
    ResourceIdentifier, ResourceObject,
};

/// Default includes when reading a cart or checkout.
pub const CART_INCLUDES: &[&str] = &["order_items", "order_items.purchased_entity"];

/// Default includes when mutating a cart item.
pub const CART_ITEM_INCLUDES: &[&str] = &[
    "order_id",
    "order_id.order_items",
    "order_id.order_items.purchased_entity",
];

/// Relationship from a cart item to its cart.
const ORDER_RELATIONSHIP: &str = "order_id";

/// Resource type of promotion coupons.
const COUPON_TYPE: &str = "promotion-coupon";

/// Result of reading the current cart.
#[derive(Clone, Debug, PartialEq)]
pub struct CartResponse {
    /// The cart, or `None` if the session has no cart yet.
    pub cart: Option<ResourceObject>,
    /// The included set of the response.
    pub included: Vec<ResourceObject>,
}

/// Result of adding or updating a cart item.
#[derive(Clone, Debug, PartialEq)]
pub struct CartItemResponse {
    /// The affected cart item.
    pub cart_item: ResourceObject,
    /// The cart the item belongs to, resolved from the included set.
    pub cart: ResourceObject,
    /// The included set of the response.
    pub included: Vec<ResourceObject>,
}

/// Result of reading or updating a checkout.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutResponse {
    /// The cart being checked out.
    pub cart: ResourceObject,
    /// The included set of the response.
    pub included: Vec<ResourceObject>,
}

/// Client for cart and checkout endpoints.
///
/// # Thread Safety
///
/// `CartClient` is `Send + Sync`. Concurrent calls share only the immutable
/// configuration; their server-side ordering is up to the backend.
///
/// # Example
///
/// ```rust,ignore
/// use commerce_cart::{CartClient, CartConfig, ResourceIdentifier};
///
/// let client = CartClient::new(CartConfig::new("https://shop.example.com", "/jsonapi")?)?;
///
/// let variation = ResourceIdentifier::new("commerce_product_variation--default", "8ccb12f6");
/// let added = client.add_to_cart(&variation, 1, None, None).await?;
/// println!("cart {} now has item {}", added.cart.id, added.cart_item.id);
/// ```
#[derive(Debug)]
pub struct CartClient {
    http_client: HttpClient,
    config: CartConfig,
}

// Verify CartClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CartClient>();
};

impl CartClient {
    /// Creates a new cart client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the HTTP client cannot be created.
    pub fn new(config: CartConfig) -> Result<Self, ConfigError> {
        let http_client = HttpClient::new(&config)?;
        tracing::debug!(api_url = %http_client.api_url(), "cart client created");
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Returns the cart token sent with every request.
    #[must_use]
    pub const fn cart_token(&self) -> &CartToken {
        self.config.cart_token()
    }

    /// Returns the current store, if configured.
    #[must_use]
    pub const fn store_id(&self) -> Option<&StoreId> {
        self.config.store_id()
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends an arbitrary request.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Http`] if the request fails.
    pub async fn request(&self, request: HttpRequest) -> Result<Document, CartError> {
        Ok(self.http_client.request(request).await?)
    }

    /// Fetches the API entrypoint.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Http`] if the request fails.
    pub async fn get_entrypoint(&self) -> Result<Document, CartError> {
        Ok(self.http_client.get("/", None).await?)
    }

    /// Fetches the current session's cart.
    ///
    /// `includes` defaults to [`CART_INCLUDES`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnexpectedDataFormat`] if the response has no
    /// `data`, or [`CartError::Http`] if the request fails.
    pub async fn get_cart(
        &self,
        fields: Option<Fields>,
        includes: Option<Vec<String>>,
    ) -> Result<CartResponse, CartError> {
        let path = "/carts";
        let document = self
            .http_client
            .get(path, Some(Self::options(fields, includes, CART_INCLUDES)))
            .await?;

        let Document { data, included, .. } = document;
        let data = data.ok_or_else(|| Self::unexpected_format(path))?;

        Ok(CartResponse {
            cart: data.into_first(),
            included: included.unwrap_or_default(),
        })
    }

    /// Adds a purchasable entity to the cart.
    ///
    /// `includes` defaults to [`CART_ITEM_INCLUDES`]; whatever is requested,
    /// the response must include the item's cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnexpectedDataFormat`] if the response has no
    /// cart item, [`CartError::Index`] if the cart is not included,
    /// [`CartError::MissingRelationship`] if the item has no `order_id`, or
    /// [`CartError::Http`] if the request fails.
    pub async fn add_to_cart(
        &self,
        purchasable_entity: &ResourceIdentifier,
        order_quantity: u32,
        fields: Option<Fields>,
        includes: Option<Vec<String>>,
    ) -> Result<CartItemResponse, CartError> {
        let path = "/cart/add";
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .options(Self::options(fields, includes, CART_ITEM_INCLUDES))
            .body(json!({
                "data": [{
                    "type": purchasable_entity.kind,
                    "id": purchasable_entity.id,
                    "meta": {"orderQuantity": order_quantity},
                }]
            }))
            .build()?;

        let document = self.http_client.request(request).await?;
        Self::cart_item_response(path, document)
    }

    /// Sets the quantity of a cart item.
    ///
    /// `includes` defaults to [`CART_ITEM_INCLUDES`].
    ///
    /// # Errors
    ///
    /// Same as [`CartClient::add_to_cart`]; additionally
    /// [`CartError::MissingRelationship`] if `cart_item` has no `order_id`.
    pub async fn update_cart_item(
        &self,
        cart_item: &ResourceObject,
        quantity: u32,
        fields: Option<Fields>,
        includes: Option<Vec<String>>,
    ) -> Result<CartItemResponse, CartError> {
        let cart_id = &Self::owning_cart(cart_item)?.id;
        let path = format!("/carts/{cart_id}/items/{}", cart_item.id);
        let request = HttpRequest::builder(HttpMethod::Patch, path.as_str())
            .options(Self::options(fields, includes, CART_ITEM_INCLUDES))
            .body(json!({
                "data": {
                    "type": cart_item.kind,
                    "id": cart_item.id,
                    "attributes": {"quantity": quantity},
                }
            }))
            .build()?;

        let document = self.http_client.request(request).await?;
        Self::cart_item_response(&path, document)
    }

    /// Removes an item from its cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::MissingRelationship`] if `cart_item` has no
    /// `order_id`, or [`CartError::Http`] if the request fails.
    pub async fn remove_cart_item(&self, cart_item: &ResourceObject) -> Result<(), CartError> {
        let cart_id = &Self::owning_cart(cart_item)?.id;
        let request = HttpRequest::builder(HttpMethod::Delete, format!("/carts/{cart_id}/items"))
            .body(json!({
                "data": [{"type": cart_item.kind, "id": cart_item.id}]
            }))
            .build()?;

        self.http_client.request(request).await?;
        Ok(())
    }

    /// Applies a promotion coupon code to a cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Http`] if the request fails.
    pub async fn apply_promotional_code(
        &self,
        cart: &ResourceIdentifier,
        promotional_code: &str,
    ) -> Result<(), CartError> {
        let request = HttpRequest::builder(HttpMethod::Patch, format!("/carts/{}/coupons", cart.id))
            .body(json!({
                "data": [{"type": COUPON_TYPE, "id": promotional_code}]
            }))
            .build()?;

        self.http_client.request(request).await?;
        Ok(())
    }

    /// Fetches the checkout for a cart.
    ///
    /// `includes` defaults to [`CART_INCLUDES`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnexpectedDataFormat`] if the response has no
    /// cart, or [`CartError::Http`] if the request fails.
    pub async fn get_checkout(
        &self,
        cart: &ResourceIdentifier,
        fields: Option<Fields>,
        includes: Option<Vec<String>>,
    ) -> Result<CheckoutResponse, CartError> {
        let path = format!("/checkout/{}", cart.id);
        let document = self
            .http_client
            .get(&path, Some(Self::options(fields, includes, CART_INCLUDES)))
            .await?;

        Self::checkout_response(&path, document)
    }

    /// Updates checkout attributes (email, addresses, shipping method, ...).
    ///
    /// `includes` defaults to [`CART_INCLUDES`]. `attributes` is sent as-is
    /// and omitted when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnexpectedDataFormat`] if the response has no
    /// cart, or [`CartError::Http`] if the request fails.
    pub async fn patch_checkout(
        &self,
        cart: &ResourceIdentifier,
        attributes: Option<Map<String, Value>>,
        fields: Option<Fields>,
        includes: Option<Vec<String>>,
    ) -> Result<CheckoutResponse, CartError> {
        let path = format!("/checkout/{}", cart.id);

        let mut data = Map::new();
        data.insert("type".to_string(), Value::String(cart.kind.clone()));
        data.insert("id".to_string(), Value::String(cart.id.clone()));
        if let Some(attributes) = attributes {
            data.insert("attributes".to_string(), Value::Object(attributes));
        }

        let request = HttpRequest::builder(HttpMethod::Patch, path.as_str())
            .options(Self::options(fields, includes, CART_INCLUDES))
            .body(json!({ "data": data }))
            .build()?;

        let document = self.http_client.request(request).await?;
        Self::checkout_response(&path, document)
    }

    fn options(
        fields: Option<Fields>,
        includes: Option<Vec<String>>,
        default_includes: &[&str],
    ) -> RequestOptions {
        RequestOptions {
            includes: Some(includes.unwrap_or_else(|| {
                default_includes.iter().map(ToString::to_string).collect()
            })),
            fields,
            ..RequestOptions::default()
        }
    }

    fn unexpected_format(path: &str) -> CartError {
        CartError::UnexpectedDataFormat {
            path: path.to_string(),
        }
    }

    /// Returns the identifier of the cart a cart item belongs to.
    fn owning_cart(cart_item: &ResourceObject) -> Result<&ResourceIdentifier, CartError> {
        cart_item
            .to_one_identifier(ORDER_RELATIONSHIP)
            .ok_or_else(|| CartError::MissingRelationship {
                kind: cart_item.kind.clone(),
                id: cart_item.id.clone(),
                field: ORDER_RELATIONSHIP,
            })
    }

    fn cart_item_response(path: &str, document: Document) -> Result<CartItemResponse, CartError> {
        let Document { data, included, .. } = document;
        let cart_item = data
            .and_then(PrimaryData::into_first)
            .ok_or_else(|| Self::unexpected_format(path))?;
        let included = included.unwrap_or_default();

        let cart = {
            let index = IncludedIndex::build(&included)?;
            if index
                .get(&cart_item.kind, &cart_item.id)
                .is_some_and(|copy| *copy != cart_item)
            {
                return Err(IndexError::ConflictingResource {
                    kind: cart_item.kind.clone(),
                    id: cart_item.id.clone(),
                }
                .into());
            }
            let resolved = resolve_relationship(&cart_item, ORDER_RELATIONSHIP, &index)?;
            match resolved {
                Some(Resolved::One(cart)) => cart.clone(),
                Some(Resolved::Many(_)) => {
                    return Err(CartError::UnexpectedCardinality {
                        field: ORDER_RELATIONSHIP,
                    })
                }
                None => {
                    return Err(CartError::MissingRelationship {
                        kind: cart_item.kind.clone(),
                        id: cart_item.id.clone(),
                        field: ORDER_RELATIONSHIP,
                    })
                }
            }
        };

        Ok(CartItemResponse {
            cart_item,
            cart,
            included,
        })
    }

    fn checkout_response(path: &str, document: Document) -> Result<CheckoutResponse, CartError> {
        let Document { data, included, .. } = document;
        let cart = data
            .and_then(PrimaryData::into_first)
            .ok_or_else(|| Self::unexpected_format(path))?;

        Ok(CheckoutResponse {
            cart,
            included: included.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(value: Value) -> Document {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_default_includes_are_used_when_none_given() {
        let options = CartClient::options(None, None, CART_INCLUDES);
        assert_eq!(
            options.includes,
            Some(vec![
                "order_items".to_string(),
                "order_items.purchased_entity".to_string()
            ])
        );
        assert!(options.fields.is_none());
    }

    #[test]
    fn test_explicit_includes_replace_defaults() {
        let options = CartClient::options(None, Some(vec!["coupons".to_string()]), CART_INCLUDES);
        assert_eq!(options.includes, Some(vec!["coupons".to_string()]));
    }

    #[test]
    fn test_cart_item_response_resolves_cart() {
        let doc = document(json!({
            "data": [{
                "type": "commerce_order_item--default",
                "id": "item-1",
                "relationships": {
                    "order_id": {"data": {"type": "commerce_order--default", "id": "cart-1"}}
                }
            }],
            "included": [
                {"type": "commerce_order--default", "id": "cart-1"},
                {"type": "commerce_product_variation--default", "id": "v1"}
            ]
        }));

        let response = CartClient::cart_item_response("/cart/add", doc).unwrap();
        assert_eq!(response.cart_item.id, "item-1");
        assert_eq!(response.cart.id, "cart-1");
        assert_eq!(response.included.len(), 2);
    }

    #[test]
    fn test_cart_item_response_rejects_conflicting_included_copy() {
        let doc = document(json!({
            "data": {
                "type": "commerce_order_item--default",
                "id": "item-1",
                "attributes": {"quantity": "2.00"},
                "relationships": {
                    "order_id": {"data": {"type": "commerce_order--default", "id": "cart-1"}}
                }
            },
            "included": [
                {"type": "commerce_order--default", "id": "cart-1"},
                {
                    "type": "commerce_order_item--default",
                    "id": "item-1",
                    "attributes": {"quantity": "1.00"},
                    "relationships": {
                        "order_id": {"data": {"type": "commerce_order--default", "id": "cart-1"}}
                    }
                }
            ]
        }));

        let err = CartClient::cart_item_response("/cart/add", doc).unwrap_err();
        assert!(matches!(
            err,
            CartError::Index(IndexError::ConflictingResource { id, .. }) if id == "item-1"
        ));
    }

    #[test]
    fn test_cart_item_response_without_data_is_unexpected_format() {
        let err = CartClient::cart_item_response("/cart/add", Document::default()).unwrap_err();
        assert!(matches!(err, CartError::UnexpectedDataFormat { path } if path == "/cart/add"));
    }

    #[test]
    fn test_cart_item_response_without_order_relationship() {
        let doc = document(json!({
            "data": {"type": "commerce_order_item--default", "id": "item-1"}
        }));
        let err = CartClient::cart_item_response("/cart/add", doc).unwrap_err();
        assert!(matches!(
            err,
            CartError::MissingRelationship { field: "order_id", .. }
        ));
    }

    #[test]
    fn test_cart_item_response_with_cart_not_included() {
        let doc = document(json!({
            "data": {
                "type": "commerce_order_item--default",
                "id": "item-1",
                "relationships": {
                    "order_id": {"data": {"type": "commerce_order--default", "id": "cart-1"}}
                }
            },
            "included": []
        }));
        let err = CartClient::cart_item_response("/cart/add", doc).unwrap_err();
        assert!(matches!(err, CartError::Index(_)));
    }

    #[test]
    fn test_owning_cart_requires_order_relationship() {
        let item: ResourceObject = serde_json::from_value(json!({
            "type": "commerce_order_item--default",
            "id": "item-1"
        }))
        .unwrap();
        assert!(CartClient::owning_cart(&item).is_err());
    }

    #[test]
    fn test_checkout_response_takes_first_resource() {
        let doc = document(json!({
            "data": [{"type": "commerce_order--default", "id": "cart-1"}]
        }));
        let response = CartClient::checkout_response("/checkout/cart-1", doc).unwrap();
        assert_eq!(response.cart.id, "cart-1");
        assert!(response.included.is_empty());

        let doc = document(json!({"data": []}));
        assert!(CartClient::checkout_response("/checkout/cart-1", doc).is_err());
    }
}
