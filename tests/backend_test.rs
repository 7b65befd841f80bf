//! Integration tests for the analysis client
//!
//! Tests HTTP client behavior using wiremock for request/response mocking.

use std::time::Duration;

use serde_json::json;
use wiremock::{
    matchers::{body_json, body_string_contains, header_regex, method, path},
    Mock, MockServer, ResponseTemplate,
};

use misinfo_dashboard::backend::{
    AnalysisBackend, AnalysisClient, AnalysisRequest, ImagePayload, DEFAULT_API_ERROR,
};
use misinfo_dashboard::config::{BackendConfig, RequestConfig};
use misinfo_dashboard::error::BackendError;

/// Create a test client pointing to mock server
fn create_test_client(base_url: &str) -> AnalysisClient {
    create_client_with_timeout(base_url, 5000)
}

fn create_client_with_timeout(base_url: &str, timeout_ms: u64) -> AnalysisClient {
    let config = BackendConfig {
        base_url: base_url.to_string(),
    };
    AnalysisClient::new(&config, RequestConfig { timeout_ms }).expect("Failed to create client")
}

#[cfg(test)]
mod analyze_tests {
    use super::*;

    #[tokio::test]
    async fn test_text_analysis_posts_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/analyze/text"))
            .and(body_json(json!({"text": "The moon landing was staged"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "type": "text",
                "risk_score": 64,
                "confidence_score": 0.8
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let result = client
            .analyze(AnalysisRequest::Text("The moon landing was staged".into()))
            .await;

        assert!(result.is_ok(), "Analysis should succeed: {:?}", result.err());
        let body = result.unwrap();
        assert_eq!(body["risk_score"], 64);
    }

    #[tokio::test]
    async fn test_url_analysis_posts_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/analyze/url"))
            .and(body_json(json!({"url": "https://example.com/story"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"type": "url"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let body = client
            .analyze(AnalysisRequest::Url("https://example.com/story".into()))
            .await
            .unwrap();
        assert_eq!(body["type"], "url");
    }

    #[tokio::test]
    async fn test_image_analysis_uploads_multipart_field() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/analyze/image"))
            .and(header_regex("content-type", "^multipart/form-data"))
            .and(body_string_contains("name=\"image\""))
            .and(body_string_contains("filename=\"chart.png\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"type": "image"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let image = ImagePayload::new("chart.png", "image/png", b"\x89PNG fake".to_vec());
        let body = client.analyze(AnalysisRequest::Image(image)).await.unwrap();
        assert_eq!(body["type"], "image");
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/analyze/text"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&format!("{}/", mock_server.uri()));
        assert!(client.analyze(AnalysisRequest::Text("x".into())).await.is_ok());
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[tokio::test]
    async fn test_error_payload_message_is_surfaced() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/analyze/text"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "Text too long (max 5000 characters)"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let err = client
            .analyze(AnalysisRequest::Text("x".into()))
            .await
            .unwrap_err();

        match err {
            BackendError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Text too long (max 5000 characters)");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_without_payload_uses_default_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/analyze/url"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let err = client
            .analyze(AnalysisRequest::Url("https://example.com".into()))
            .await
            .unwrap_err();

        match err {
            BackendError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, DEFAULT_API_ERROR);
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_single_attempt_on_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/analyze/text"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        assert!(client.analyze(AnalysisRequest::Text("x".into())).await.is_err());
    }

    #[tokio::test]
    async fn test_invalid_json_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/analyze/text"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let err = client
            .analyze(AnalysisRequest::Text("x".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/analyze/text"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let client = create_client_with_timeout(&mock_server.uri(), 50);
        let err = client
            .analyze(AnalysisRequest::Text("x".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Timeout { timeout_ms: 50 }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_unavailable() {
        let client = create_test_client("http://127.0.0.1:1");
        let err = client
            .analyze(AnalysisRequest::Text("x".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Unavailable { .. }));
    }
}

#[cfg(test)]
mod service_info_tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "healthy",
                "message": "Misinformation detection API is running"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let health = client.health().await.unwrap();
        assert!(health.is_healthy());
        assert_eq!(
            health.message.as_deref(),
            Some("Misinformation detection API is running")
        );
    }

    #[tokio::test]
    async fn test_educational_tips() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/educational/tips"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "general_tips": ["Check the source"],
                "red_flags": ["Urgent language"],
                "verification_steps": ["Search fact-checkers", "Find the original"]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let tips = client.educational_tips().await.unwrap();
        assert_eq!(tips.general_tips, vec!["Check the source"]);
        assert_eq!(tips.red_flags, vec!["Urgent language"]);
        assert_eq!(tips.verification_steps.len(), 2);
    }

    #[tokio::test]
    async fn test_tips_with_missing_lists() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/educational/tips"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"red_flags": []})))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server.uri());
        let tips = client.educational_tips().await.unwrap();
        assert!(tips.general_tips.is_empty());
        assert!(tips.verification_steps.is_empty());
    }
}
