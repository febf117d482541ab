use std::sync::Arc;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use wiremock::matchers::{body_json, body_string, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rust_decimal::Decimal;
use tauros_api_client::auth::{Credentials, NonceProvider, StaticCredentials, sign_request};
use tauros_api_client::rest::TaurosRestClient;
use tauros_api_client::rest::private::{NewOrder, Transfer};
use tauros_api_client::{ErrorKind, Side, TaurosError};

const NONCE: u64 = 1577836800000;

struct FixedNonce(u64);

impl NonceProvider for FixedNonce {
    fn next_nonce(&self) -> u64 {
        self.0
    }
}

fn secret() -> String {
    STANDARD.encode("test_secret")
}

fn build_client(server: &MockServer) -> TaurosRestClient {
    let credentials = Arc::new(StaticCredentials::new("test_key", secret()).unwrap());
    TaurosRestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .nonce_provider(Arc::new(FixedNonce(NONCE)))
        .build()
        .unwrap()
}

fn expected_signature(http_method: &str, absolute_path: &str, body: &str) -> String {
    let credentials = Credentials::new("test_key", secret()).unwrap();
    sign_request(&credentials, NONCE, http_method, absolute_path, body)
}

#[tokio::test]
async fn test_get_balances_is_signed() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "success": true,
        "msg": "",
        "data": {
            "wallets": [{
                "coin": "BTC",
                "coin_name": "Bitcoin",
                "address": "",
                "balances": {
                    "available": "0.50000000",
                    "pending": "0",
                    "frozen": "0.1",
                    "in_orders": "0.25"
                }
            }]
        }
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/data/listbalances/"))
        .and(header("authorization", "Bearer test_key"))
        .and(header("taur-nonce", NONCE.to_string().as_str()))
        .and(header(
            "taur-signature",
            expected_signature("GET", "/api/v1/data/listbalances/", "").as_str(),
        ))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let balances = client.get_balances().await.unwrap();

    assert_eq!(balances.len(), 1);
    assert_eq!(balances[0].coin, "BTC");
    assert!(balances[0].address.is_none());
    assert_eq!(balances[0].balances.total(), "0.85".parse::<Decimal>().unwrap());
}

#[tokio::test]
async fn test_get_deposit_address() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "success": true,
        "data": { "coin": "BTC", "address": "bc1qexampleaddress" }
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/data/getdepositaddress/"))
        .and(query_param("coin", "BTC"))
        .and(header(
            "taur-signature",
            expected_signature("GET", "/api/v1/data/getdepositaddress/", "").as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let address = client.get_deposit_address("BTC").await.unwrap();
    assert_eq!(address, "bc1qexampleaddress");
}

#[tokio::test]
async fn test_place_order() {
    let server = MockServer::start().await;
    let request_body = serde_json::json!({
        "market": "BTC-MXN",
        "side": "buy",
        "amount": "0.001",
        "type": "limit",
        "price": "150000"
    });
    let response = serde_json::json!({
        "success": true,
        "msg": "Order placed",
        "data": {
            "id": 55,
            "market": "BTC-MXN",
            "side": "buy",
            "amount": "0.001",
            "price": "150000",
            "created_at": "2020-01-01T00:00:00Z"
        }
    });

    Mock::given(method("POST"))
        .and(path("/api/v1/trading/placeorder/"))
        .and(body_json(&request_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let order = NewOrder::limit(
        "BTC-MXN",
        Side::Buy,
        "0.001".parse().unwrap(),
        "150000".parse().unwrap(),
    );
    let placed = client.place_order(&order).await.unwrap();

    assert_eq!(placed.identifier(), Some(55));
    assert_eq!(placed.price, Some("150000".parse().unwrap()));

    let requests = server.received_requests().await.unwrap();
    let sent_body = String::from_utf8(requests[0].body.clone()).unwrap();
    let sent_signature = requests[0].headers.get("taur-signature").unwrap().to_str().unwrap();
    assert_eq!(
        sent_signature,
        expected_signature("POST", "/api/v1/trading/placeorder/", &sent_body)
    );
}

#[tokio::test]
async fn test_place_order_insufficient_balance() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/trading/placeorder/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "msg": "Insufficient balance"
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let order = NewOrder::market("BTC-MXN", Side::Sell, "1".parse().unwrap());
    let error = client.place_order(&order).await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Business);
    assert!(error.api_error().unwrap().is_insufficient_balance());
    assert!(!error.is_retryable());
}

#[tokio::test]
async fn test_invalid_token_is_security_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/trading/myopenorders/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "success": false,
            "msg": "Invalid token."
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = client.get_open_orders().await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Security);
    assert!(error.is_security_related());
    assert!(error.api_error().unwrap().is_invalid_token());
}

#[tokio::test]
async fn test_malformed_response_is_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/trading/myopenorders/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = client.get_open_orders().await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Protocol);
    match error {
        TaurosError::InvalidResponse { status, body, .. } => {
            assert_eq!(status, 502);
            assert!(body.contains("Bad Gateway"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_close_order_sends_identifier() {
    let server = MockServer::start().await;
    let body = r#"{"id":7}"#;

    Mock::given(method("POST"))
        .and(path("/api/v1/trading/closeorder/"))
        .and(body_string(body))
        .and(header(
            "taur-signature",
            expected_signature("POST", "/api/v1/trading/closeorder/", body).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "msg": "Order closed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.close_order(7).await.unwrap();
}

#[tokio::test]
async fn test_close_all_orders() {
    let server = MockServer::start().await;
    let open_orders = serde_json::json!({
        "success": true,
        "data": [
            { "order_id": 1, "market": "BTC-MXN", "side": "buy", "price": "100" },
            { "order_id": 2, "market": "ETH-MXN", "side": "sell", "price": "200" },
            { "market": "XRP-MXN", "side": "sell" }
        ]
    });
    let closed = serde_json::json!({ "success": true, "msg": "" });

    Mock::given(method("GET"))
        .and(path("/api/v1/trading/myopenorders/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(open_orders))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/trading/closeorder/"))
        .and(body_json(serde_json::json!({ "id": 1 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(closed.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/trading/closeorder/"))
        .and(body_json(serde_json::json!({ "id": 2 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(closed))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    assert_eq!(client.close_all_orders().await.unwrap(), 2);
}

#[tokio::test]
async fn test_close_all_orders_stops_at_first_failure() {
    let server = MockServer::start().await;
    let open_orders = serde_json::json!({
        "success": true,
        "data": [
            { "order_id": 1, "market": "BTC-MXN" },
            { "order_id": 2, "market": "BTC-MXN" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/trading/myopenorders/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(open_orders))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/trading/closeorder/"))
        .and(body_json(serde_json::json!({ "id": 1 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "msg": "Order not found"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/trading/closeorder/"))
        .and(body_json(serde_json::json!({ "id": 2 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = client.close_all_orders().await.unwrap_err();
    assert_eq!(error.api_error().unwrap().message, "Order not found");
}

#[tokio::test]
async fn test_transfer_uses_v2_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/wallets/inner-transfer/"))
        .and(body_string_contains(r#""amount":1.5"#))
        .and(body_string_contains(r#""recipient":"friend@example.com""#))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "msg": "",
            "payload": { "id": 12 },
            "data": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let transfer = Transfer::new("1234", "MXN", "friend@example.com", "1.5".parse().unwrap());
    client.transfer(&transfer).await.unwrap();
}

#[tokio::test]
async fn test_missing_credentials_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = TaurosRestClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap();
    let error = client.get_balances().await.unwrap_err();

    assert!(matches!(error, TaurosError::MissingCredentials));
    assert_eq!(error.kind(), ErrorKind::Configuration);
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/trading/myopenorders/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "success": true, "data": [] }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let credentials = Arc::new(StaticCredentials::new("test_key", secret()).unwrap());
    let client = TaurosRestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let error = client.get_open_orders().await.unwrap_err();

    assert!(matches!(error, TaurosError::Timeout));
    assert_eq!(error.kind(), ErrorKind::Transport);
    assert!(error.is_retryable());
}

#[tokio::test]
async fn test_nonces_never_decrease() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/trading/myopenorders/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true, "data": [] })),
        )
        .expect(3)
        .mount(&server)
        .await;

    let credentials = Arc::new(StaticCredentials::new("test_key", secret()).unwrap());
    let client = TaurosRestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .build()
        .unwrap();
    for _ in 0..3 {
        assert!(client.get_open_orders().await.unwrap().is_empty());
    }

    let nonces: Vec<u64> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| {
            request.headers.get("taur-nonce").unwrap().to_str().unwrap().parse().unwrap()
        })
        .collect();
    assert_eq!(nonces.len(), 3);
    assert!(nonces.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(nonces.iter().all(|nonce| nonce.to_string().len() == 13));
}
