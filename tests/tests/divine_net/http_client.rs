use std::time::Duration;

use axum::{
    Router,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use divine::net::{Headers, HttpClient, Net, NetError, NetExt, NetOptions};
use divine_test_utils::TestHttpServer;
use rstest::*;

async fn manifest_endpoint() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/vnd.apple.mpegurl")],
        "#EXTM3U\n",
    )
}

async fn echo_endpoint(headers: HeaderMap) -> impl IntoResponse {
    let mut response = HeaderMap::new();
    if let Some(value) = headers.get("x-probe") {
        response.insert("x-probe-echo", value.clone());
    }
    if let Some(agent) = headers.get(header::USER_AGENT) {
        response.insert("x-user-agent", agent.clone());
    }
    (response, ())
}

async fn missing_endpoint() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "gone")
}

async fn slow_endpoint() -> &'static str {
    tokio::time::sleep(Duration::from_secs(2)).await;
    "late"
}

async fn server() -> TestHttpServer {
    let router = Router::new()
        .route("/manifest", get(manifest_endpoint))
        .route("/echo", get(echo_endpoint))
        .route("/missing", get(missing_endpoint))
        .route("/slow", get(slow_endpoint));
    TestHttpServer::new(router).await
}

#[fixture]
fn client() -> HttpClient {
    HttpClient::new(NetOptions::default()).unwrap()
}

#[rstest]
#[tokio::test]
async fn head_returns_response_headers(client: HttpClient) {
    let server = server().await;

    let headers = client.head(server.url("/manifest"), None).await.unwrap();

    assert_eq!(
        headers.get("content-type"),
        Some("application/vnd.apple.mpegurl")
    );
}

#[rstest]
#[tokio::test]
async fn head_sends_request_headers(client: HttpClient) {
    let server = server().await;
    let mut request = Headers::new();
    request.insert("x-probe", "1");

    let headers = client.head(server.url("/echo"), Some(request)).await.unwrap();

    assert_eq!(headers.get("x-probe-echo"), Some("1"));
}

#[tokio::test]
async fn head_sends_configured_user_agent() {
    let server = server().await;
    let client = HttpClient::new(NetOptions::default().with_user_agent("divine-test/1")).unwrap();

    let headers = client.head(server.url("/echo"), None).await.unwrap();

    assert_eq!(headers.get("x-user-agent"), Some("divine-test/1"));
}

#[rstest]
#[tokio::test]
async fn head_maps_error_status(client: HttpClient) {
    let server = server().await;

    let err = client.head(server.url("/missing"), None).await.unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    assert!(matches!(err, NetError::HttpError { .. }));
}

#[rstest]
#[tokio::test]
async fn timeout_layer_cuts_slow_responses(client: HttpClient) {
    let server = server().await;
    let net = client.with_timeout(Duration::from_millis(200));

    let err = net.head(server.url("/slow"), None).await.unwrap_err();

    assert!(err.is_timeout());
}
