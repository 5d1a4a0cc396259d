//! Shared fixtures for integration tests.
//!
//! Documents mirror what a Drupal Commerce JSON:API backend returns, trimmed
//! to the fields the tests look at.

#![allow(dead_code)]

use commerce_cart::auth::CartToken;
use commerce_cart::{ApiPrefix, BaseUrl, CartConfig, StoreId};
use serde_json::{json, Value};
use wiremock::{MockServer, ResponseTemplate};

pub const CART_ID: &str = "e01c73af-e825-44e6-8530-6a4dc663a44f";
pub const CART_TYPE: &str = "commerce_order--default";
pub const ORDER_ITEM_ID: &str = "7a2a0e5c-5c1f-4d9b-9a5e-0d6a1a1f8e21";
pub const ORDER_ITEM_TYPE: &str = "commerce_order_item--default";
pub const VARIATION_ID: &str = "8ccb12f6-5465-454c-8495-5346798f9b68";
pub const VARIATION_TYPE: &str = "product-variation--simple";
pub const TEST_TOKEN: &str = "test_token";

/// Creates a configuration pointing at the mock server.
pub fn config_for(server: &MockServer) -> CartConfig {
    CartConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .api_prefix(ApiPrefix::new("/jsonapi").unwrap())
        .cart_token(CartToken::new(TEST_TOKEN).unwrap())
        .build()
        .unwrap()
}

/// Same as [`config_for`] with a current store.
pub fn config_with_store(server: &MockServer, store_id: &str) -> CartConfig {
    CartConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .api_prefix(ApiPrefix::new("/jsonapi").unwrap())
        .cart_token(CartToken::new(TEST_TOKEN).unwrap())
        .store_id(StoreId::new(store_id).unwrap())
        .build()
        .unwrap()
}

/// A response framed as JSON:API.
pub fn json_api(status: u16, body: &Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.to_string(), "application/vnd.api+json")
}

pub fn entrypoint() -> Value {
    json!({
        "jsonapi": {"version": "1.0"},
        "data": [],
        "links": {
            "self": {"href": "https://localhost:8080/jsonapi"},
            "carts": {"href": "https://localhost:8080/jsonapi/carts"},
            "cart_add": {"href": "https://localhost:8080/jsonapi/cart/add"}
        }
    })
}

pub fn not_found() -> Value {
    json!({
        "jsonapi": {"version": "1.0"},
        "errors": [{"status": "404", "detail": "could not find response"}]
    })
}

pub fn empty_carts() -> Value {
    json!({
        "jsonapi": {
            "version": "1.0",
            "meta": {"links": {"self": {"href": "http://jsonapi.org/format/1.0/"}}}
        },
        "data": []
    })
}

fn cart_resource() -> Value {
    json!({
        "type": CART_TYPE,
        "id": CART_ID,
        "attributes": {
            "order_number": null,
            "total_price": {"number": "12.00", "currency_code": "USD", "formatted": "$12.00"}
        },
        "relationships": {
            "order_items": {
                "data": [{"type": ORDER_ITEM_TYPE, "id": ORDER_ITEM_ID}]
            }
        }
    })
}

fn order_item_resource() -> Value {
    json!({
        "type": ORDER_ITEM_TYPE,
        "id": ORDER_ITEM_ID,
        "attributes": {
            "title": "The Adventure Begins Camping Mug",
            "quantity": "1.00"
        },
        "relationships": {
            "order_id": {"data": {"type": CART_TYPE, "id": CART_ID}},
            "purchased_entity": {"data": {"type": VARIATION_TYPE, "id": VARIATION_ID}}
        }
    })
}

fn variation_resource() -> Value {
    json!({
        "type": VARIATION_TYPE,
        "id": VARIATION_ID,
        "attributes": {
            "sku": "MUG-ADVENTURE",
            "price": {"number": "12.00", "currency_code": "USD"}
        }
    })
}

/// `GET /carts` with one cart holding one item.
pub fn get_cart() -> Value {
    json!({
        "jsonapi": {"version": "1.0"},
        "data": [cart_resource()],
        "included": [order_item_resource(), variation_resource()]
    })
}

/// `POST /cart/add` for the camping mug variation.
pub fn add_to_cart() -> Value {
    json!({
        "jsonapi": {"version": "1.0"},
        "data": [order_item_resource()],
        "included": [cart_resource(), order_item_resource(), variation_resource()]
    })
}

/// `PATCH /carts/{cart}/items/{item}` with the quantity set to `quantity`.
pub fn updated_cart_item(quantity: &str) -> Value {
    let mut item = order_item_resource();
    item["attributes"]["quantity"] = json!(quantity);
    json!({
        "data": item.clone(),
        "included": [cart_resource(), item, variation_resource()]
    })
}

/// `GET /checkout/{cart}`.
pub fn checkout() -> Value {
    let mut cart = cart_resource();
    cart["attributes"]["email"] = json!("customer@example.com");
    json!({
        "data": cart,
        "included": [order_item_resource(), variation_resource()]
    })
}

/// A product with variations, an image, a brand, and categories.
pub fn product_with_includes() -> Value {
    let categories = [
        ("5f0b2b7e-1d3a-4b0e-9a55-1c2c6e6c0a01", "Camping"),
        ("5f0b2b7e-1d3a-4b0e-9a55-1c2c6e6c0a02", "Drinkware"),
        ("5f0b2b7e-1d3a-4b0e-9a55-1c2c6e6c0a03", "Mugs"),
        ("5f0b2b7e-1d3a-4b0e-9a55-1c2c6e6c0a04", "Outdoor"),
        ("5f0b2b7e-1d3a-4b0e-9a55-1c2c6e6c0a05", "Gifts"),
        ("5f0b2b7e-1d3a-4b0e-9a55-1c2c6e6c0a06", "Accessories"),
    ];
    let category_identifiers: Vec<Value> = categories
        .iter()
        .map(|(id, _)| json!({"type": "taxonomy-term--product-categories", "id": id}))
        .collect();

    let mut included = vec![
        json!({
            "type": VARIATION_TYPE,
            "id": VARIATION_ID,
            "attributes": {"sku": "MUG-ADVENTURE"},
            "relationships": {
                "images": {"data": [{"type": "file", "id": "f1e2d3c4-0000-4000-8000-000000000001"}]}
            }
        }),
        json!({
            "type": "file",
            "id": "f1e2d3c4-0000-4000-8000-000000000001",
            "attributes": {"filename": "mug.png", "uri": {"url": "/files/mug.png"}}
        }),
        json!({
            "type": "taxonomy-term--special-categories",
            "id": "a9c8b7d6-0000-4000-8000-000000000001",
            "attributes": {"name": "Featured"}
        }),
    ];
    included.extend(categories.iter().map(|(id, name)| {
        json!({
            "type": "taxonomy-term--product-categories",
            "id": id,
            "attributes": {"name": name}
        })
    }));
    included.push(json!({
        "type": "taxonomy-term--brands",
        "id": "b1b2b3b4-0000-4000-8000-000000000001",
        "attributes": {"name": "Gentlemen's Hardware"}
    }));

    json!({
        "data": {
            "type": "product--simple",
            "id": "2f9d6a34-2b8c-4c93-95f2-5b0f0d0e8c11",
            "attributes": {"title": "The Adventure Begins Camping Mug"},
            "relationships": {
                "variations": {"data": [{"type": VARIATION_TYPE, "id": VARIATION_ID}]},
                "special_categories": {
                    "data": [{"type": "taxonomy-term--special-categories", "id": "a9c8b7d6-0000-4000-8000-000000000001"}]
                },
                "product_categories": {"data": category_identifiers},
                "brand": {
                    "data": {"type": "taxonomy-term--brands", "id": "b1b2b3b4-0000-4000-8000-000000000001"}
                }
            }
        },
        "included": included
    })
}
