/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for dispatch, authentication and error classification
[POS]:    Integration tests - HTTP pipeline
[UPDATE]: When dispatch classification or auth headers change
*/

mod common;

use common::{authed_client, public_client, setup_mock_server, TEST_API_KEY, TEST_API_SECRET};
use ftx_adapter::{
    ClientConfig, FtxClient, FtxError, OrderType, PlaceOrderParams, RequestSigner, Side,
};
use rstest::rstest;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn place_order_params() -> PlaceOrderParams {
    PlaceOrderParams {
        market: "BTC/USD".to_string(),
        side: Side::Buy,
        price: Some(100.0),
        order_type: OrderType::Limit,
        size: 1.0,
        reduce_only: None,
        ioc: None,
        post_only: None,
        client_id: None,
        reject_on_price_band: None,
        reject_after_ts: None,
    }
}

const ORDER_RESULT: &str = r#"{
    "id": 9596912,
    "market": "BTC/USD",
    "side": "buy",
    "type": "limit",
    "status": "new",
    "size": 1.0,
    "filledSize": 0.0,
    "remainingSize": 1.0,
    "price": 100.0,
    "avgFillPrice": null,
    "createdAt": "2019-03-05T09:56:55.728933+00:00",
    "reduceOnly": false,
    "ioc": false,
    "postOnly": false
}"#;

#[tokio::test]
async fn test_get_markets_empty_result() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_raw(r#"{"success": true, "result": []}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let markets = assert_ok!(public_client(&server).get_markets().await);
    assert!(markets.is_empty());
}

#[tokio::test]
async fn test_unauthenticated_get_carries_no_auth_or_content_type_headers() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_raw(r#"{"success": true, "result": []}"#, "application/json"),
        )
        .mount(&server)
        .await;

    public_client(&server)
        .get_markets()
        .await
        .expect("get_markets failed");

    let requests = server.received_requests().await.expect("requests recorded");
    let request = &requests[0];
    assert!(request.headers.get("FTX-KEY").is_none());
    assert!(request.headers.get("FTX-TS").is_none());
    assert!(request.headers.get("FTX-SIGN").is_none());
    assert!(request.headers.get("content-type").is_none());
}

#[tokio::test]
async fn test_signed_post_headers_match_canonical_payload() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_raw(
                    format!(r#"{{"success": true, "result": {ORDER_RESULT}}}"#),
                    "application/json",
                ),
        )
        .expect(1)
        .mount(&server)
        .await;

    authed_client(&server)
        .place_order(place_order_params())
        .await
        .expect("place_order failed");

    let requests = server.received_requests().await.expect("requests recorded");
    let request = &requests[0];

    let body: serde_json::Value = serde_json::from_slice(&request.body).expect("json body");
    assert_eq!(
        body,
        serde_json::json!({
            "market": "BTC/USD",
            "side": "buy",
            "price": 100.0,
            "type": "limit",
            "size": 1.0
        })
    );
    assert_eq!(
        request.headers.get("content-type").expect("content-type"),
        "application/json"
    );
    assert_eq!(request.headers.get("FTX-KEY").expect("key header"), TEST_API_KEY);

    // The signature must cover nonce + method + path + body, byte for byte
    let nonce = request
        .headers
        .get("FTX-TS")
        .expect("nonce header")
        .to_str()
        .expect("ascii nonce");
    assert!(nonce.chars().all(|c| c.is_ascii_digit()));

    let mut payload = format!("{nonce}POST/orders").into_bytes();
    payload.extend_from_slice(&request.body);
    let expected_signature = RequestSigner::new(TEST_API_SECRET).sign(&payload);
    assert_eq!(
        request
            .headers
            .get("FTX-SIGN")
            .expect("signature header")
            .to_str()
            .expect("ascii signature"),
        expected_signature
    );
}

#[tokio::test]
async fn test_signed_get_signature_covers_query_string() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_raw(r#"{"success": true, "result": []}"#, "application/json"),
        )
        .mount(&server)
        .await;

    authed_client(&server)
        .get_open_orders(Some("BTC-PERP"))
        .await
        .expect("get_open_orders failed");

    let requests = server.received_requests().await.expect("requests recorded");
    let request = &requests[0];
    let nonce = request
        .headers
        .get("FTX-TS")
        .expect("nonce header")
        .to_str()
        .expect("ascii nonce");

    let payload = format!("{nonce}GET/orders?market=BTC-PERP");
    let expected_signature = RequestSigner::new(TEST_API_SECRET).sign(payload.as_bytes());
    assert_eq!(
        request
            .headers
            .get("FTX-SIGN")
            .expect("signature header")
            .to_str()
            .expect("ascii signature"),
        expected_signature
    );
}

#[tokio::test]
async fn test_subaccount_header_sent_on_every_call() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_raw(r#"{"success": true, "result": []}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let client = FtxClient::new(ClientConfig {
        endpoint: server.uri(),
        subaccount: Some("hedge-book".to_string()),
        ..ClientConfig::default()
    })
    .expect("client init");
    assert_eq!(client.subaccount(), Some("hedge-book"));

    client.get_markets().await.expect("get_markets failed");

    let requests = server.received_requests().await.expect("requests recorded");
    assert_eq!(
        requests[0].headers.get("FTX-SUBACCOUNT").expect("subaccount header"),
        "hedge-book"
    );
}

#[tokio::test]
async fn test_rate_limit_classified_before_body_parse() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(ResponseTemplate::new(429).set_body_raw("not json at all", "text/plain"))
        .mount(&server)
        .await;

    let result = public_client(&server).get_markets().await;
    assert!(matches!(result, Err(FtxError::RateLimited)));
}

#[rstest]
#[case::already_closed("Order already closed")]
#[case::already_queued("Order already queued for cancellation")]
#[tokio::test]
async fn test_recognized_cancel_errors_get_dedicated_variants(#[case] message: &str) {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/orders/42"))
        .respond_with(
            ResponseTemplate::new(400)
                .insert_header("content-type", "application/json")
                .set_body_raw(
                    format!(r#"{{"success": false, "error": "{message}"}}"#),
                    "application/json",
                ),
        )
        .mount(&server)
        .await;

    let error = authed_client(&server)
        .cancel_order(42)
        .await
        .expect_err("cancel should fail");

    match message {
        "Order already closed" => assert!(matches!(error, FtxError::OrderAlreadyClosed)),
        _ => assert!(matches!(error, FtxError::OrderAlreadyQueued)),
    }
    assert!(error.is_cancel_noop());
}

#[tokio::test]
async fn test_unrecognized_error_message_surfaces_status_and_text() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(
            ResponseTemplate::new(400)
                .insert_header("content-type", "application/json")
                .set_body_raw(
                    r#"{"success": false, "error": "Size too small"}"#,
                    "application/json",
                ),
        )
        .mount(&server)
        .await;

    let error = authed_client(&server)
        .place_order(place_order_params())
        .await
        .expect_err("place_order should fail");

    match error {
        FtxError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Size too small");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_error_body_yields_unexpected_status() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(ResponseTemplate::new(502).set_body_raw("<html>bad gateway</html>", "text/html"))
        .mount(&server)
        .await;

    let result = public_client(&server).get_markets().await;
    assert!(matches!(result, Err(FtxError::UnexpectedStatus(502))));
}

#[tokio::test]
async fn test_envelope_failure_at_200_is_rejected_not_success() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_raw(
                    r#"{"success": false, "error": "insufficient funds"}"#,
                    "application/json",
                ),
        )
        .mount(&server)
        .await;

    let error = authed_client(&server)
        .place_order(place_order_params())
        .await
        .expect_err("place_order should fail");

    match error {
        FtxError::Rejected(message) => assert_eq!(message, "insufficient funds"),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_failure_surfaces_as_transport_error() {
    // Nothing is listening on this port
    let client = FtxClient::new(ClientConfig {
        endpoint: "http://127.0.0.1:1".to_string(),
        ..ClientConfig::default()
    })
    .expect("client init");

    let result = client.get_markets().await;
    match result {
        Err(error @ FtxError::Transport(_)) => assert!(error.is_retryable()),
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[tokio::test]
async fn test_call_is_cancellable_with_timeout() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_raw(r#"{"success": true, "result": []}"#, "application/json")
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = public_client(&server);
    let result = tokio::time::timeout(
        std::time::Duration::from_millis(100),
        client.get_markets(),
    )
    .await;
    assert!(result.is_err(), "slow call should be cancellable by the caller");
}
