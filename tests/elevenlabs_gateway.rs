use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use httpmock::prelude::*;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use tts_proxy::application::{ConversionSettings, ConvertTextHandler};
use tts_proxy::infrastructure::adapters::{ElevenLabsClient, ElevenLabsClientConfig};
use tts_proxy::infrastructure::http::{AppState, HttpServer, ServerConfig};

const VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";
const API_KEY: &str = "sk_test_key";

/// 指向 mock 上游的完整路由
fn app(base_url: &str) -> Router {
    let engine = Arc::new(ElevenLabsClient::new(ElevenLabsClientConfig::new(base_url)).unwrap());
    let settings = ConversionSettings::new(Some(API_KEY), VOICE_ID).unwrap();
    let state = AppState::new(ConvertTextHandler::new(engine, settings), None);
    HttpServer::new(ServerConfig::default(), state).router()
}

fn convert_request(text: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/convert")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "text": text }).to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_audio_passthrough() {
    let server = MockServer::start_async().await;
    let upstream = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("/v1/text-to-speech/{}", VOICE_ID))
                .header("xi-api-key", API_KEY)
                .header("accept", "audio/mpeg")
                .json_body(json!({
                    "text": "Hello from the proxy",
                    "model_id": "eleven_monolingual_v1",
                    "voice_settings": { "stability": 0.5, "similarity_boost": 0.5 }
                }));
            then.status(200)
                .header("content-type", "audio/mpeg")
                .body(b"ID3\x03fake-mp3-frames");
        })
        .await;

    let response = app(&server.base_url())
        .oneshot(convert_request("Hello from the proxy"))
        .await
        .unwrap();

    upstream.assert_async().await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/mpeg");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"ID3\x03fake-mp3-frames");
}

#[tokio::test]
async fn test_upstream_rate_limit() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(429).body(r#"{"detail":"too_many_requests"}"#);
        })
        .await;

    let response = app(&server.base_url())
        .oneshot(convert_request("Hello"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let body = json_body(response).await;
    assert_eq!(body["error"], "rate_limit");
    assert_eq!(body["message"], "Rate limit exceeded. Please try again later");
}

#[tokio::test]
async fn test_upstream_auth_failures() {
    for (status, kind) in [(401, "unauthorized"), (403, "forbidden"), (400, "bad_request")] {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(status);
            })
            .await;

        let response = app(&server.base_url())
            .oneshot(convert_request("Hello"))
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), status);
        assert_eq!(json_body(response).await["error"], kind);
    }
}

#[tokio::test]
async fn test_upstream_server_error_passthrough() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(500).body("internal failure");
        })
        .await;

    let response = app(&server.base_url())
        .oneshot(convert_request("Hello"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], "api_error");
    assert_eq!(body["message"], "API request failed: internal failure");
}

#[tokio::test]
async fn test_upstream_unreachable() {
    let response = app("http://127.0.0.1:1")
        .oneshot(convert_request("Hello"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(response).await;
    assert_eq!(body["error"], "network_error");
    assert_eq!(body["message"], "Failed to connect to the API service");
}

#[tokio::test]
async fn test_validation_happens_before_upstream_call() {
    let server = MockServer::start_async().await;
    let upstream = server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200).body("audio");
        })
        .await;

    let response = app(&server.base_url())
        .oneshot(convert_request(&"a".repeat(5001)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "validation_error");
    upstream.assert_hits_async(0).await;
}
