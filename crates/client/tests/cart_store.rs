//! Cart state tests against a mock backend.

#![allow(clippy::unwrap_used)]

mod common;

use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use partsmarket_core::{CartItemId, ProductId};

fn cart_body() -> serde_json::Value {
    json!({
        "items": [
            {
                "id": 1,
                "productId": 7,
                "quantity": 2,
                "product": { "id": 7, "name": "Filtro de óleo", "price": 10.0 },
            },
        ],
    })
}

fn two_item_cart_body() -> serde_json::Value {
    json!({
        "items": [
            {
                "id": 1,
                "productId": 7,
                "quantity": 2,
                "product": { "id": 7, "name": "Filtro de óleo", "price": 10.0 },
            },
            {
                "id": 2,
                "productId": 8,
                "quantity": 1,
                "product": { "id": 8, "name": "Vela de ignição", "price": 25.5 },
            },
        ],
    })
}

#[tokio::test]
async fn fetch_cart_derives_count_and_total_from_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cart_body()))
        .expect(1)
        .mount(&server)
        .await;

    let app = common::app(&server);
    app.cart().fetch_cart().await;

    assert_eq!(app.cart().items().len(), 1);
    assert_eq!(app.cart().items_count(), 2);
    assert_eq!(app.cart().total_price(), Decimal::from(20));
    assert!(!app.cart().loading());
}

#[tokio::test]
async fn fetch_cart_without_items_field_yields_empty_cart() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let app = common::app(&server);
    app.cart().fetch_cart().await;

    assert!(app.cart().items().is_empty());
    assert_eq!(app.cart().items_count(), 0);
    assert_eq!(app.cart().total_price(), Decimal::ZERO);
}

#[tokio::test]
async fn fetch_cart_failure_keeps_previous_items() {
    let server = MockServer::start().await;
    let app = common::app(&server);

    {
        let _guard = Mock::given(method("GET"))
            .and(path("/cart"))
            .respond_with(ResponseTemplate::new(200).set_body_json(cart_body()))
            .expect(1)
            .mount_as_scoped(&server)
            .await;
        app.cart().fetch_cart().await;
    }
    assert_eq!(app.cart().items_count(), 2);

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    app.cart().fetch_cart().await;

    assert_eq!(app.cart().items_count(), 2);
    assert!(!app.cart().loading());
}

#[tokio::test]
async fn add_to_cart_opens_the_cart_and_refetches() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cart/add"))
        .and(body_json(json!({ "productId": 7, "quantity": 1 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cart_body()))
        .expect(1)
        .mount(&server)
        .await;

    let app = common::app(&server);
    assert!(!app.cart().is_open());

    app.cart().add_to_cart(ProductId::new(7), 1).await.unwrap();

    assert!(app.cart().is_open());
    assert_eq!(app.cart().items_count(), 2);
    assert!(!app.cart().loading());
}

#[tokio::test]
async fn add_to_cart_failure_rethrows_and_skips_the_refetch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cart/add"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cart_body()))
        .expect(0)
        .mount(&server)
        .await;

    let app = common::app(&server);
    let result = app.cart().add_to_cart(ProductId::new(7), 1).await;

    assert!(result.is_err());
    assert!(app.cart().items().is_empty());
    assert!(!app.cart().is_open());
    assert!(!app.cart().loading());
}

#[tokio::test]
async fn remove_item_filters_exactly_the_confirmed_item() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_item_cart_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/cart/item/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let app = common::app(&server);
    app.cart().fetch_cart().await;
    app.cart().remove_item(CartItemId::new(1)).await;

    let items = app.cart().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, CartItemId::new(2));
}

#[tokio::test]
async fn remove_item_failure_leaves_items_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_item_cart_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/cart/item/1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let app = common::app(&server);
    app.cart().fetch_cart().await;
    app.cart().remove_item(CartItemId::new(1)).await;

    assert_eq!(app.cart().items().len(), 2);
}

#[tokio::test]
async fn clear_cart_removes_items_sequentially_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_item_cart_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/cart/item/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/cart/item/2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let app = common::app(&server);
    app.cart().fetch_cart().await;
    app.cart().clear_cart().await;

    assert!(app.cart().items().is_empty());

    // One DELETE per item, issued in the items' order.
    let deletes: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|request| request.method.as_str() == "DELETE")
        .map(|request| request.url.path().to_string())
        .collect();
    assert_eq!(deletes, vec!["/cart/item/1", "/cart/item/2"]);
}

#[tokio::test]
async fn toggle_cart_flips_the_open_flag_without_network() {
    let server = MockServer::start().await;
    let app = common::app(&server);

    assert!(!app.cart().is_open());
    app.cart().toggle_cart();
    assert!(app.cart().is_open());
    app.cart().toggle_cart();
    assert!(!app.cart().is_open());
}
