//! Integration tests for the storefront HTTP client

use rust_decimal::Decimal;
use serde_json::json;
use storefront_core::types::MembershipLevel;
use storefront_http::client::error::ClientError;
use storefront_http::types::{
    CartAddRequest, ChargeRequest, LoginRequest, PageQuery, RegisterRequest, StockAdjustment,
};
use storefront_http::{AuthenticatedStoreClient, PublicStoreClient, TypedClientBuilder};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ok_envelope(data: serde_json::Value) -> serde_json::Value {
    json!({"code": "000", "msg": null, "data": data})
}

#[tokio::test]
async fn builder_requires_base_url() {
    let result = TypedClientBuilder::new().build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn builder_trims_trailing_slash() {
    let client = PublicStoreClient::new("http://localhost:8080/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn login_sends_query_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .and(query_param("username", "alice"))
        .and(query_param("password", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!("token-abc"))))
        .mount(&mock_server)
        .await;

    let client = PublicStoreClient::new(mock_server.uri()).unwrap();
    let envelope = client
        .login(&LoginRequest {
            username: "alice".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    assert_eq!(envelope.code, "000");
    assert_eq!(envelope.data.as_deref(), Some("token-abc"));
}

#[tokio::test]
async fn register_posts_camel_case_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(body_json(json!({
            "username": "alice",
            "password": "secret",
            "name": "Alice",
            "role": "USER",
            "telephone": "13000000000"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({
            "username": "alice",
            "name": "Alice",
            "role": "USER"
        }))))
        .mount(&mock_server)
        .await;

    let client = PublicStoreClient::new(mock_server.uri()).unwrap();
    let envelope = client
        .register(&RegisterRequest {
            username: "alice".into(),
            password: "secret".into(),
            name: "Alice".into(),
            role: "USER".into(),
            avatar: None,
            telephone: Some("13000000000".into()),
            email: None,
            location: None,
        })
        .await
        .unwrap();

    assert_eq!(envelope.data.unwrap().username, "alice");
}

#[tokio::test]
async fn authenticated_client_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/cart"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({
            "items": [{
                "cartItemId": "c-1",
                "productId": "p-1",
                "title": "Keyboard",
                "price": 150,
                "quantity": 1
            }],
            "total": 1,
            "totalAmount": 150
        }))))
        .mount(&mock_server)
        .await;

    let client = AuthenticatedStoreClient::new(mock_server.uri(), "session-token").unwrap();
    let envelope = client.cart().await.unwrap();
    let data = envelope.data.unwrap();

    assert_eq!(data.items.len(), 1);
    assert_eq!(data.total_amount, Decimal::from(150));
}

#[tokio::test]
async fn authenticate_upgrades_a_public_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/cart"))
        .and(header("authorization", "Bearer fresh-token"))
        .and(body_json(json!({"productId": "p-9", "quantity": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({
            "cartItemId": "c-9",
            "productId": "p-9",
            "title": "Mouse",
            "price": 60,
            "quantity": 2
        }))))
        .mount(&mock_server)
        .await;

    let client = PublicStoreClient::new(mock_server.uri())
        .unwrap()
        .authenticate("fresh-token");
    let envelope = client
        .add_to_cart(&CartAddRequest {
            product_id: "p-9".into(),
            quantity: 2,
        })
        .await
        .unwrap();

    assert_eq!(envelope.data.unwrap().cart_item_id, "c-9");
}

#[tokio::test]
async fn error_statuses_map_to_the_client_taxonomy() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/p-401"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products/p-404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("No such product"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products/p-500"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = PublicStoreClient::new(mock_server.uri()).unwrap();

    let unauthorized = client.product("p-401").await.unwrap_err();
    assert!(matches!(unauthorized, ClientError::AuthenticationFailed(_)));
    assert!(unauthorized.is_auth_failure());

    assert!(matches!(
        client.product("p-404").await.unwrap_err(),
        ClientError::NotFound(_)
    ));
    assert!(matches!(
        client.product("p-500").await.unwrap_err(),
        ClientError::ServerError { status: 500, .. }
    ));
}

#[tokio::test]
async fn envelope_code_is_passed_through_uninterpreted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": "400", "msg": "catalog offline", "data": null})),
        )
        .mount(&mock_server)
        .await;

    let client = PublicStoreClient::new(mock_server.uri()).unwrap();
    let envelope = client.products().await.unwrap();

    assert_eq!(envelope.code, "400");
    assert_eq!(envelope.msg.as_deref(), Some("catalog offline"));
    assert!(envelope.data.is_none());
}

#[tokio::test]
async fn set_default_address_hits_templated_path_with_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/addresses/5/default"))
        .and(query_param("username", "alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!(true))))
        .mount(&mock_server)
        .await;

    let client = AuthenticatedStoreClient::new(mock_server.uri(), "t").unwrap();
    let envelope = client.set_default_address(5, "alice").await.unwrap();
    assert_eq!(envelope.code, "000");
}

#[tokio::test]
async fn adjust_stockpile_patches_a_signed_delta() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/products/stockpile/p-1"))
        .and(body_json(json!({"amount": -2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!(null))))
        .mount(&mock_server)
        .await;

    let client = AuthenticatedStoreClient::new(mock_server.uri(), "t").unwrap();
    let envelope = client
        .adjust_stockpile("p-1", &StockAdjustment { amount: -2 })
        .await
        .unwrap();
    assert_eq!(envelope.code, "000");
}

#[tokio::test]
async fn ranked_product_listings_send_page_cursor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products/by-sales"))
        .and(query_param("page", "1"))
        .and(query_param("size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .mount(&mock_server)
        .await;

    let client = PublicStoreClient::new(mock_server.uri()).unwrap();
    let envelope = client
        .products_by_sales(PageQuery { page: 1, size: 10 })
        .await
        .unwrap();
    assert_eq!(envelope.data.unwrap().len(), 0);
}

#[tokio::test]
async fn membership_charge_is_query_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/members/charge"))
        .and(query_param("username", "alice"))
        .and(query_param("months", "3"))
        .and(query_param("amount", "90"))
        .and(query_param("membershipLevel", "GOLD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!({
            "id": 1,
            "username": "alice",
            "membershipLevel": "GOLD",
            "startDate": "2024-05-01T00:00:00",
            "endDate": "2024-08-01T00:00:00",
            "active": true
        }))))
        .mount(&mock_server)
        .await;

    let client = AuthenticatedStoreClient::new(mock_server.uri(), "t").unwrap();
    let envelope = client
        .charge_membership(&ChargeRequest {
            username: "alice".into(),
            months: 3,
            amount: MembershipLevel::Gold.monthly_price() * Decimal::from(3),
            membership_level: MembershipLevel::Gold,
        })
        .await
        .unwrap();

    let member = envelope.data.unwrap();
    assert_eq!(member.membership_level, MembershipLevel::Gold);
    assert!(member.active);
}

#[tokio::test]
async fn image_upload_returns_public_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/images"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(json!("https://img.example.com/42.png"))),
        )
        .mount(&mock_server)
        .await;

    let client = AuthenticatedStoreClient::new(mock_server.uri(), "t").unwrap();
    let envelope = client
        .upload_image("cover.png", vec![0x89, 0x50, 0x4e, 0x47])
        .await
        .unwrap();
    assert_eq!(
        envelope.data.as_deref(),
        Some("https://img.example.com/42.png")
    );
}
