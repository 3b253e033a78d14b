use std::net::TcpListener;
use std::time::Duration;

use cloner_core::{CloneResult, MALFORMED_RESPONSE_MESSAGE, SERVICE_UNREACHABLE_MESSAGE};
use cloner_engine::{
    resolve_clone, ClientSettings, CloneClient, FailureKind, ReqwestCloneClient,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestCloneClient {
    ReqwestCloneClient::new(ClientSettings::with_endpoint(server.uri())).expect("client")
}

/// An address nothing listens on, so connecting is refused.
fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn posts_trimmed_url_and_decodes_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "url": "example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "html": "<p>hi</p>",
            "metadata": {
                "elements_extracted": 3,
                "stylesheets_found": 1,
                "has_screenshot": false
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .request_clone("example.com")
        .await
        .expect("clone ok");

    assert_eq!(result.html(), Some("<p>hi</p>"));
    let summary = result.metadata().and_then(|m| m.summary());
    assert_eq!(
        summary.as_deref(),
        Some("Elements: 3, Stylesheets: 1, Screenshot: ✗")
    );
}

#[tokio::test]
async fn service_failure_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": false, "error": "Invalid URL" })),
        )
        .mount(&server)
        .await;

    let result = resolve_clone(&client_for(&server), "nope").await;

    assert_eq!(result, CloneResult::failed("Invalid URL"));
}

#[tokio::test]
async fn body_decides_even_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "success": false, "error": "Scrape failed" })),
        )
        .mount(&server)
        .await;

    let result = resolve_clone(&client_for(&server), "example.com").await;

    assert_eq!(result, CloneResult::failed("Scrape failed"));
}

#[tokio::test]
async fn validation_error_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{ "loc": ["body", "url"], "msg": "invalid or missing URL scheme" }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.request_clone("example.com").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);

    let result = resolve_clone(&client, "example.com").await;
    assert_eq!(result.error(), Some(MALFORMED_RESPONSE_MESSAGE));
}

#[tokio::test]
async fn non_json_body_becomes_generic_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let result = resolve_clone(&client_for(&server), "example.com").await;

    assert!(!result.success());
    assert_eq!(result.error(), Some(MALFORMED_RESPONSE_MESSAGE));
}

#[tokio::test]
async fn connection_refused_becomes_unreachable_failure() {
    let client = ReqwestCloneClient::new(ClientSettings::with_endpoint(closed_endpoint()))
        .expect("client");

    let err = client.request_clone("example.com").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);

    let result = resolve_clone(&client, "example.com").await;
    assert_eq!(result, CloneResult::failed(SERVICE_UNREACHABLE_MESSAGE));
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "success": true, "html": "<p>late</p>" })),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::with_endpoint(server.uri())
    };
    let client = ReqwestCloneClient::new(settings).expect("client");

    let err = client.request_clone("example.com").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
    assert_eq!(
        resolve_clone(&client, "example.com").await,
        CloneResult::service_unreachable()
    );
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clone"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "html": "0123456789" })),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        max_bytes: 10,
        ..ClientSettings::with_endpoint(server.uri())
    };
    let client = ReqwestCloneClient::new(settings).expect("client");

    let err = client.request_clone("example.com").await.unwrap_err();
    assert!(matches!(err.kind, FailureKind::TooLarge { max_bytes: 10, .. }));
}
