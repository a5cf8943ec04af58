//! HTTP-level tests for the generation API client.
//!
//! Every operation is exercised against a mock server: success bodies
//! pass through unmodified, error bodies are normalized into application
//! errors with the operation's fallback message, and transport failures
//! stay distinct from application failures.

use mockito::Matcher;
use serde_json::json;

use pptgen_client::types::GenerationRequest;
use pptgen_client::{ClientError, GenerationApiClient, GenerationApiConfig};

fn client_for(server: &mockito::Server) -> GenerationApiClient {
    let config = GenerationApiConfig {
        base_url: format!("{}/api", server.url()),
        timeout_ms: 5000,
    };
    GenerationApiClient::new(config).unwrap()
}

fn sample_request() -> GenerationRequest {
    GenerationRequest {
        topic: "AI".to_string(),
        template: 1,
        include_code: false,
    }
}

#[tokio::test]
async fn test_generate_posts_exact_json_body_once() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "topic": "AI",
            "template": 1,
            "includeCode": false
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Presentation created successfully!"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client.generate(sample_request()).await.unwrap();

    assert_eq!(
        response.message.as_deref(),
        Some("Presentation created successfully!")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_sends_template_and_code_flag() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(Matcher::Json(json!({
            "topic": "Rust ownership",
            "template": 3,
            "includeCode": true
        })))
        .with_status(200)
        .with_body(r#"{"message": "Presentation created successfully!"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let request = GenerationRequest {
        topic: "Rust ownership".to_string(),
        template: 3,
        include_code: true,
    };

    client.generate(request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_resolves_with_exact_body() {
    let body = json!({
        "message": "Presentation created successfully!",
        "download_url": "/api/download",
        "slide_count": 8
    });

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let response = client.generate(sample_request()).await.unwrap();

    assert_eq!(serde_json::to_value(&response).unwrap(), body);
}

#[tokio::test]
async fn test_generate_uses_error_field_from_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/generate")
        .with_status(400)
        .with_body(r#"{"error": "Topic is required"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.generate(sample_request()).await.unwrap_err();

    match err {
        ClientError::ApiError { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Topic is required");
        }
        other => panic!("expected ApiError, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_falls_back_when_error_field_missing() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/generate")
        .with_status(500)
        .with_body(r#"{"details": "model unavailable"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.generate(sample_request()).await.unwrap_err();

    match err {
        ClientError::ApiError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to generate presentation");
        }
        other => panic!("expected ApiError, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_falls_back_when_error_body_is_not_json() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/generate")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.generate(sample_request()).await.unwrap_err();

    // A malformed error body degrades to the fallback message instead of
    // surfacing a secondary parse error.
    match err {
        ClientError::ApiError { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Failed to generate presentation");
        }
        other => panic!("expected ApiError, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_does_not_retry_on_server_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .with_status(500)
        .with_body(r#"{"error": "boom"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let _ = client.generate(sample_request()).await;

    mock.assert_async().await;
}

#[tokio::test]
async fn test_result_info_builds_download_url() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/result")
        .with_status(200)
        .with_body(r#"{"presentation_id": "pres-42"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let info = client.result_info().await.unwrap();

    assert_eq!(info.presentation_id, "pres-42");
    assert_eq!(
        client.download_url(&info.presentation_id),
        format!("{}/api/download/pres-42", server.url())
    );
}

#[tokio::test]
async fn test_result_info_falls_back_when_error_field_missing() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/result")
        .with_status(404)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.result_info().await.unwrap_err();

    match err {
        ClientError::ApiError { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Failed to get presentation info");
        }
        other => panic!("expected ApiError, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_server_yields_transport_error() {
    // Nothing listens on port 1; the connection is refused before any
    // HTTP exchange happens.
    let config = GenerationApiConfig {
        base_url: "http://127.0.0.1:1/api".to_string(),
        timeout_ms: 2000,
    };
    let client = GenerationApiClient::new(config).unwrap();

    let err = client.generate(sample_request()).await.unwrap_err();

    assert!(err.is_transport());
    assert!(err.is_recoverable());
    assert!(!matches!(err, ClientError::ApiError { .. }));
}

#[tokio::test]
async fn test_health_reports_service_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/health")
        .with_status(200)
        .with_body(r#"{"status": "API is running!"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let health = client.health().await.unwrap();

    assert_eq!(health.status, "API is running!");
}

#[tokio::test]
async fn test_download_returns_artifact_bytes() {
    let artifact = b"PK\x03\x04 not a real pptx";

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/download/pres-42")
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(artifact.as_slice())
        .create_async()
        .await;

    let client = client_for(&server);
    let bytes = client.download("pres-42").await.unwrap();

    assert_eq!(bytes.as_ref(), artifact.as_slice());
}

#[tokio::test]
async fn test_download_normalizes_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/download/missing")
        .with_status(404)
        .with_body(r#"{"error": "Presentation file not found"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.download("missing").await.unwrap_err();

    match err {
        ClientError::ApiError { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Presentation file not found");
        }
        other => panic!("expected ApiError, got: {:?}", other),
    }
}
