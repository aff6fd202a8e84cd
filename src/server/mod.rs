//! Web server exposing the legal document assistant.
//!
//! Provides JSON endpoints for:
//! - Document analysis, summarization and comparison
//! - Text-to-speech
//! - Legal chat with keyword fallbacks
//! - A static legal template catalogue

mod assets;
pub mod error;
mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{Config, DEFAULT_MAX_UPLOAD_BYTES};
use crate::inference::{HuggingFaceClient, InferenceProvider};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn InferenceProvider>,
    /// Directory mounted at `/static`, if it exists.
    pub static_dir: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(provider: Arc<dyn InferenceProvider>) -> Self {
        Self {
            provider,
            static_dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    /// Build state from loaded configuration with the hosted inference client.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = HuggingFaceClient::new(config.inference.clone())?;
        Ok(Self {
            provider: Arc::new(client),
            static_dir: config.server.static_dir.clone(),
            max_upload_bytes: config.server.max_upload_bytes,
        })
    }
}

/// Start the web server.
pub async fn serve(config: &Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    let app = create_router(state);

    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::fallback::CONTRACT_ADVICE;
    use crate::services::summarize::FALLBACK_SUMMARY;
    use crate::services::testing::{Call, StubProvider};

    const BOUNDARY: &str = "legalmind-test-boundary";

    enum Part<'a> {
        Text(&'a str, &'a str),
        File {
            name: &'a str,
            filename: &'a str,
            content_type: &'a str,
            bytes: &'a [u8],
        },
    }

    fn multipart_body(parts: &[Part]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            match part {
                Part::Text(name, value) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                            .as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                }
                Part::File {
                    name,
                    filename,
                    content_type,
                    bytes,
                } => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                            name, filename, content_type
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(bytes);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn multipart_request(uri: &str, parts: &[Part]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap()
    }

    fn urlencoded_request(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn app(provider: StubProvider) -> axum::Router {
        create_router(AppState::new(Arc::new(provider)))
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(StubProvider::unavailable())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_index_falls_back_to_embedded_page() {
        let response = app(StubProvider::unavailable())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("LegalMind"));
    }

    #[tokio::test]
    async fn test_index_prefers_static_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<p>custom page</p>").unwrap();

        let mut state = AppState::new(Arc::new(StubProvider::unavailable()));
        state.static_dir = Some(dir.path().to_path_buf());
        let response = create_router(state)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert_eq!(html, "<p>custom page</p>");
    }

    #[tokio::test]
    async fn test_analyze_plain_text_upload() {
        let request = multipart_request(
            "/api/analyze-document",
            &[
                Part::File {
                    name: "file",
                    filename: "lease.txt",
                    content_type: "text/plain",
                    bytes: b"The tenant shall pay rent monthly.",
                },
                Part::Text("language", "english"),
            ],
        );
        let response = app(StubProvider::echoing(" Looks fine."))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let analysis = json["analysis"].as_str().unwrap();
        assert!(analysis.contains("lease.txt"));
        assert!(analysis.contains("text/plain"));
        assert!(analysis.contains("Looks fine."));
    }

    #[tokio::test]
    async fn test_analyze_survives_total_provider_failure() {
        let request = multipart_request(
            "/api/analyze-document",
            &[Part::File {
                name: "file",
                filename: "contract.pdf",
                content_type: "application/pdf",
                bytes: b"%PDF-1.4",
            }],
        );
        let response = app(StubProvider::unavailable())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(!json["analysis"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_invalid_utf8_is_server_error() {
        let request = multipart_request(
            "/api/analyze-document",
            &[Part::File {
                name: "file",
                filename: "broken.txt",
                content_type: "text/plain",
                bytes: &[0xff, 0xfe, 0xfd],
            }],
        );
        let response = app(StubProvider::echoing(""))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "Failed to analyze document");
    }

    #[tokio::test]
    async fn test_analyze_missing_file_is_unprocessable() {
        let request = multipart_request("/api/analyze-document", &[Part::Text("language", "en")]);
        let response = app(StubProvider::unavailable())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "Field required: file");
    }

    #[tokio::test]
    async fn test_summarize_requires_file_or_text() {
        let request = multipart_request("/api/summarize-document", &[Part::Text("length", "short")]);
        let response = app(StubProvider::unavailable())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "No document or text provided");
    }

    #[tokio::test]
    async fn test_summarize_text() {
        let request = urlencoded_request(
            "/api/summarize-document",
            "text=The+parties+agree+to+terms.&length=long",
        );
        let response = app(StubProvider::with_summary("Parties agree."))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["summary"]
            .as_str()
            .unwrap()
            .starts_with("Parties agree.\n\n"));
    }

    #[tokio::test]
    async fn test_summarize_invalid_utf8_uses_fallback() {
        let request = multipart_request(
            "/api/summarize-document",
            &[Part::File {
                name: "file",
                filename: "broken.txt",
                content_type: "text/plain",
                bytes: &[0xc3, 0x28],
            }],
        );
        let response = app(StubProvider::with_summary("unused"))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["summary"], FALLBACK_SUMMARY);
    }

    #[tokio::test]
    async fn test_text_to_speech_returns_audio() {
        let request = urlencoded_request("/api/text-to-speech", "text=Hello&voice=male");
        let response = app(StubProvider::with_audio(b"RIFFdata"))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "audio/wav"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"echo-verse-audio.wav\""
        );
        assert_eq!(body_bytes(response).await, b"RIFFdata");
    }

    #[tokio::test]
    async fn test_text_to_speech_failure_is_server_error() {
        let request = urlencoded_request("/api/text-to-speech", "text=Hello");
        let response = app(StubProvider::unavailable())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "Failed to generate speech");
    }

    #[tokio::test]
    async fn test_chat_survives_total_provider_failure() {
        let request = urlencoded_request(
            "/api/chat-legal-advisor",
            "message=Is+my+CONTRACT+valid%3F",
        );
        let response = app(StubProvider::unavailable())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["answer"], CONTRACT_ADVICE);
        assert!(!json["disclaimer"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_missing_message_is_unprocessable() {
        let request = urlencoded_request("/api/chat-legal-advisor", "context=general");
        let response = app(StubProvider::unavailable())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_chat_empty_message_is_unprocessable() {
        let request = urlencoded_request("/api/chat-legal-advisor", "message=&context=general");
        let response = app(StubProvider::echoing(" Fine."))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "Field required: message");
    }

    #[tokio::test]
    async fn test_text_to_speech_empty_text_is_unprocessable() {
        let provider = Arc::new(StubProvider::with_audio(b"RIFFdata"));
        let router = create_router(AppState::new(provider.clone()));

        let request = urlencoded_request("/api/text-to-speech", "text=&voice=male");
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "Field required: text");
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_empty_language_uses_default() {
        let request = multipart_request(
            "/api/analyze-document",
            &[
                Part::File {
                    name: "file",
                    filename: "lease.txt",
                    content_type: "text/plain",
                    bytes: b"The tenant shall pay rent monthly.",
                },
                Part::Text("language", ""),
            ],
        );
        let response = app(StubProvider::echoing(" Looks fine."))
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["analysis"]
            .as_str()
            .unwrap()
            .contains("- Analysis Language: english\n"));
    }

    #[tokio::test]
    async fn test_summarize_skips_untouched_file_input() {
        let provider = Arc::new(StubProvider::with_summary("Parties agree."));
        let router = create_router(AppState::new(provider.clone()));

        // Browsers send an empty part with an empty filename for an unused file input.
        let request = multipart_request(
            "/api/summarize-document",
            &[
                Part::File {
                    name: "file",
                    filename: "",
                    content_type: "application/octet-stream",
                    bytes: b"",
                },
                Part::Text("text", "The parties agree to terms."),
            ],
        );
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["summary"]
            .as_str()
            .unwrap()
            .starts_with("Parties agree.\n\n"));

        match &provider.calls()[0] {
            Call::Summarize(text, _) => assert_eq!(text, "The parties agree to terms."),
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unsupported_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/chat-legal-advisor")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"message\":\"hi\"}"))
            .unwrap();
        let response = app(StubProvider::unavailable())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_compare_requires_two_files() {
        let request = multipart_request(
            "/api/compare-documents",
            &[Part::File {
                name: "file1",
                filename: "a.txt",
                content_type: "text/plain",
                bytes: b"first",
            }],
        );
        let response = app(StubProvider::unavailable())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "Two files required for comparison");
    }

    #[tokio::test]
    async fn test_compare_survives_total_provider_failure() {
        let request = multipart_request(
            "/api/compare-documents",
            &[
                Part::File {
                    name: "file1",
                    filename: "a.txt",
                    content_type: "text/plain",
                    bytes: b"first",
                },
                Part::File {
                    name: "file2",
                    filename: "b.txt",
                    content_type: "text/plain",
                    bytes: b"second",
                },
            ],
        );
        let response = app(StubProvider::unavailable())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let comparison = json["comparison"].as_str().unwrap();
        assert!(comparison.contains("a.txt"));
        assert!(comparison.contains("b.txt"));
    }

    #[tokio::test]
    async fn test_document_comparison_alias() {
        let request = multipart_request("/api/document-comparison", &[Part::Text("x", "y")]);
        let response = app(StubProvider::unavailable())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_templates() {
        let response = app(StubProvider::unavailable())
            .oneshot(
                Request::get("/api/legal-templates")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["templates"]["contracts"].is_array());
        assert!(json["templates"]["policies"].is_array());
        assert!(json["templates"]["letters"].is_array());
    }

    #[tokio::test]
    async fn test_generate_template() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/legal-templates")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"templateId":"nda","customizations":{"party":"Acme"}}"#,
            ))
            .unwrap();
        let response = app(StubProvider::unavailable())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["template"].as_str().unwrap().contains("Acme"));
    }
}
