//! Endpoint client outcome classification against mock backends.

use std::net::SocketAddr;

use serde_json::json;

use api_console::config::BackendConfig;
use api_console::probe::{Endpoint, EndpointClient, ProbeError};

mod common;

fn client_for(addr: SocketAddr, timeout_secs: u64) -> EndpointClient {
    let config = BackendConfig {
        base_url: format!("http://{}", addr),
        request_timeout_secs: timeout_secs,
        startup_check: false,
    };
    EndpointClient::new(&config).unwrap()
}

#[tokio::test]
async fn ok_response_yields_parsed_json_for_every_endpoint() {
    let addr = common::start_mock_backend(vec![
        ("/", 200, r#"{"x":1}"#),
        ("/secret", 200, r#"{"x":1}"#),
        ("/random", 200, r#"{"x":1}"#),
        ("/health", 200, r#"{"x":1}"#),
    ])
    .await;
    let client = client_for(addr, 5);

    for endpoint in Endpoint::ALL {
        let body = client.call(endpoint).await.unwrap();
        assert_eq!(body, json!({"x": 1}), "endpoint {}", endpoint);
    }
}

#[tokio::test]
async fn not_found_yields_http_error_with_body() {
    // No routes registered: every path answers 404 "not found".
    let addr = common::start_mock_backend(vec![]).await;
    let client = client_for(addr, 5);

    let err = client.call(Endpoint::Secret).await.unwrap_err();
    match err {
        ProbeError::Http {
            status,
            status_text,
            body,
        } => {
            assert_eq!(status, 404);
            assert_eq!(status_text, "Not Found");
            assert_eq!(body.as_deref(), Some("not found"));
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn connection_refused_yields_network_error() {
    // Bind then drop to get an address nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr, 5);
    let err = client.call(Endpoint::Welcome).await.unwrap_err();
    assert!(matches!(err, ProbeError::Network { .. }), "got {:?}", err);
}

#[tokio::test]
async fn malformed_json_on_success_status_yields_parse_error() {
    let addr = common::start_mock_backend(vec![("/random", 200, "definitely not json")]).await;
    let client = client_for(addr, 5);

    let err = client.call(Endpoint::Random).await.unwrap_err();
    assert!(matches!(err, ProbeError::Parse(_)), "got {:?}", err);
}

#[tokio::test]
async fn hung_backend_hits_the_deadline() {
    let addr = common::start_hanging_backend().await;
    let client = client_for(addr, 1);

    let err = client.call(Endpoint::Health).await.unwrap_err();
    match err {
        ProbeError::Network { message } => {
            assert!(message.contains("deadline"), "message: {}", message);
        }
        other => panic!("expected Network error, got {:?}", other),
    }
}

#[tokio::test]
async fn connectivity_check_accepts_any_http_response() {
    // 404 on every path still proves the host answers HTTP.
    let addr = common::start_mock_backend(vec![]).await;
    let client = client_for(addr, 5);

    assert!(client.connectivity_check().await.is_ok());
}

#[tokio::test]
async fn connectivity_check_reports_unreachable_host() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr, 5);
    let err = client.connectivity_check().await.unwrap_err();
    assert!(matches!(err, ProbeError::Network { .. }));
}
