//! User profile cache tests against a mock backend.

#![allow(clippy::unwrap_used)]

mod common;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use partsmarket_core::UserId;

#[tokio::test]
async fn fetch_user_hits_the_network_once_per_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/User/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "name": "Carlos",
            "email": "carlos@example.com",
            "role": "seller",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = common::app(&server);
    let first = app.users().fetch_user_by_id(UserId::new(3)).await.unwrap();
    let second = app.users().fetch_user_by_id(UserId::new(3)).await.unwrap();

    assert_eq!(first.name, "Carlos");
    assert_eq!(first, second);
    assert_eq!(second.role.as_deref(), Some("seller"));
}

#[tokio::test]
async fn distinct_ids_are_fetched_independently() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/User/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "name": "Carlos",
            "email": "carlos@example.com",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/User/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4,
            "name": "Ana",
            "email": "ana@example.com",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = common::app(&server);
    let carlos = app.users().fetch_user_by_id(UserId::new(3)).await.unwrap();
    let ana = app.users().fetch_user_by_id(UserId::new(4)).await.unwrap();

    assert_eq!(carlos.name, "Carlos");
    assert_eq!(ana.name, "Ana");
}

#[tokio::test]
async fn failed_fetch_returns_none_and_is_retried() {
    let server = MockServer::start().await;
    let app = common::app(&server);

    {
        let _guard = Mock::given(method("GET"))
            .and(path("/User/3"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount_as_scoped(&server)
            .await;

        assert!(app.users().fetch_user_by_id(UserId::new(3)).await.is_none());
    }

    // Failures are not cached.
    Mock::given(method("GET"))
        .and(path("/User/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "name": "Carlos",
            "email": "carlos@example.com",
        })))
        .expect(1)
        .mount(&server)
        .await;

    assert!(app.users().fetch_user_by_id(UserId::new(3)).await.is_some());
}
