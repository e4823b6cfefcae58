//! Integration tests for the studio API
//!
//! Covers the session, upload, generation, chat and export endpoints

#[cfg(test)]
mod tests {
    use crate::handlers::{
        chat_clear_handler, chat_send_handler, create_session_handler, export_handler,
        generate_handler, health_check, preview_handler, session_state_handler, upload_handler,
    };
    use crate::server::StudioConfig;
    use crate::state::{ApiState, ServerState};
    use crate::types::{
        ChatClearRequest, ChatSendRequest, DocumentSlot, GenerateRequest, UploadFile,
        UploadRequest,
    };
    use axum::{
        extract::{Path, State as AxumState},
        http::{header, StatusCode},
        response::IntoResponse,
        routing::post,
        Json, Router,
    };
    use base64::{engine::general_purpose::STANDARD, Engine};
    use mockall::mock;
    use scengen_core::{DocumentExtractor, ScengenError, SessionStore, UploadedDocument};
    use scengen_plugin_extract::StandardExtractor;
    use scengen_provider_ollama::OllamaClient;
    use std::sync::{Arc, Mutex};
    use tracing::instrument::WithSubscriber;
    use uuid::Uuid;

    mock! {
        Extractor {}

        impl DocumentExtractor for Extractor {
            fn extract(&self, documents: &[UploadedDocument]) -> scengen_core::Result<String>;
        }
    }

    /// Helper to create test server state with a chosen model URL and extractor
    fn create_test_server_state_with(
        base_url: &str,
        extractor: Arc<dyn DocumentExtractor>,
    ) -> ServerState {
        let llm = Arc::new(
            OllamaClient::new(Some(base_url.to_string()), Some("llama3".to_string())).unwrap(),
        );
        ServerState {
            api_state: ApiState::new(SessionStore::new()),
            llm,
            extractor,
            config: Arc::new(StudioConfig::default()),
        }
    }

    /// Helper to create test server state backed by the real extractor
    fn create_test_server_state() -> ServerState {
        create_test_server_state_with("http://localhost:11434", Arc::new(StandardExtractor))
    }

    /// Read a JSON body back out of an axum response
    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Spawn a one-route stub standing in for the generation endpoint
    async fn spawn_model_stub(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route("/api/generate", post(move || async move { (status, body) }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{}", addr)
    }

    /// Collects log output from a scoped subscriber
    #[derive(Clone)]
    struct LogSink(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn text_upload(filename: &str, text: &str) -> UploadFile {
        UploadFile {
            filename: filename.to_string(),
            content: STANDARD.encode(text),
            base64_encoded: true,
            mime_type: Some("text/plain".to_string()),
        }
    }

    // ========================
    // Session and Health Tests
    // ========================

    #[tokio::test]
    async fn test_health_endpoint() {
        let state = create_test_server_state();
        let response = health_check(AxumState(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["sessions"], 0);
    }

    #[tokio::test]
    async fn test_create_session() {
        let state = create_test_server_state();

        let created = create_session_handler(AxumState(state.clone())).await.0;
        assert!(created.success);
        assert_eq!(state.api_state.sessions.count().await, 1);

        let session = state.api_state.sessions.get(created.session_id).await;
        assert!(session.is_some());
    }

    #[tokio::test]
    async fn test_session_snapshot_for_unknown_session() {
        let state = create_test_server_state();

        let response = session_state_handler(AxumState(state), Path(Uuid::new_v4()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_session_snapshot_reflects_state() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;
        state
            .api_state
            .sessions
            .update(session_id, |s| s.response = "last reply".to_string())
            .await
            .unwrap();

        let snapshot = session_state_handler(AxumState(state), Path(session_id))
            .await
            .unwrap()
            .0;
        assert!(snapshot.success);
        assert_eq!(snapshot.session_id, session_id);
        assert_eq!(snapshot.response, "last reply");
        assert_eq!(snapshot.text_chars, 0);
        assert!(snapshot.chat_history.is_empty());
    }

    #[tokio::test]
    async fn test_session_snapshot_reports_char_counts_not_text() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;
        let large_text = "lane keeping assist ".repeat(5_000);
        let chars = large_text.chars().count();
        state
            .api_state
            .sessions
            .update(session_id, move |s| s.text_data = large_text)
            .await
            .unwrap();

        let response = session_state_handler(AxumState(state), Path(session_id))
            .await
            .into_response();
        let body = response_json(response).await;
        assert_eq!(body["textChars"], chars);
        assert_eq!(body["additionalTextChars"], 0);
        // The extracted text itself must not ride along on the snapshot
        assert!(body.get("textData").is_none());
        assert!(!body.to_string().contains("lane keeping assist"));
    }

    // ============
    // Upload Tests
    // ============

    #[tokio::test]
    async fn test_upload_rejects_empty_file_list() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;

        let request = UploadRequest {
            session_id,
            slot: DocumentSlot::Standard,
            files: vec![],
        };
        let response = upload_handler(AxumState(state), Json(request)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "No files provided");
    }

    #[tokio::test]
    async fn test_upload_stores_standard_slot() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;

        let request = UploadRequest {
            session_id,
            slot: DocumentSlot::Standard,
            files: vec![text_upload("standard.txt", "ego vehicle keeps the lane")],
        };
        let response = upload_handler(AxumState(state.clone()), Json(request)).await;
        let body = response_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["characters"], 26);

        let session = state.api_state.sessions.get(session_id).await.unwrap();
        assert_eq!(session.text_data, "ego vehicle keeps the lane");
        assert_eq!(session.additional_text_data, "");
    }

    #[tokio::test]
    async fn test_upload_stores_reference_slot() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;

        let request = UploadRequest {
            session_id,
            slot: DocumentSlot::Reference,
            files: vec![
                text_upload("ref1.txt", "cut-in from the left"),
                text_upload("ref2.txt", "lead vehicle brakes"),
            ],
        };
        let response = upload_handler(AxumState(state.clone()), Json(request)).await;
        let body = response_json(response).await;
        assert_eq!(body["success"], true);

        let session = state.api_state.sessions.get(session_id).await.unwrap();
        assert_eq!(
            session.additional_text_data,
            "cut-in from the left\n\nlead vehicle brakes"
        );
        assert_eq!(session.text_data, "");
    }

    #[tokio::test]
    async fn test_upload_rejects_unsupported_extension() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;

        let request = UploadRequest {
            session_id,
            slot: DocumentSlot::Standard,
            files: vec![text_upload("tool.exe", "binary")],
        };
        let body = response_json(upload_handler(AxumState(state), Json(request)).await).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Unsupported file type. Allowed: .pdf, .txt, .docx");
    }

    #[tokio::test]
    async fn test_upload_rejects_path_traversal() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;

        let request = UploadRequest {
            session_id,
            slot: DocumentSlot::Standard,
            files: vec![text_upload("../../etc/passwd.txt", "nope")],
        };
        let body = response_json(upload_handler(AxumState(state), Json(request)).await).await;
        assert_eq!(body["success"], false);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("path traversal detected"));
    }

    #[tokio::test]
    async fn test_upload_rejects_invalid_base64() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;

        let request = UploadRequest {
            session_id,
            slot: DocumentSlot::Standard,
            files: vec![UploadFile {
                filename: "standard.txt".to_string(),
                content: "!!! not base64 !!!".to_string(),
                base64_encoded: true,
                mime_type: None,
            }],
        };
        let body = response_json(upload_handler(AxumState(state), Json(request)).await).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Invalid base64 encoding");
    }

    #[tokio::test]
    async fn test_upload_requires_base64_for_pdf() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;

        let request = UploadRequest {
            session_id,
            slot: DocumentSlot::Standard,
            files: vec![UploadFile {
                filename: "standard.pdf".to_string(),
                content: "raw pdf bytes".to_string(),
                base64_encoded: false,
                mime_type: None,
            }],
        };
        let body = response_json(upload_handler(AxumState(state), Json(request)).await).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Pdf uploads must be base64 encoded");
    }

    #[tokio::test]
    async fn test_upload_rejects_oversized_file() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;

        let request = UploadRequest {
            session_id,
            slot: DocumentSlot::Standard,
            files: vec![UploadFile {
                filename: "big.txt".to_string(),
                content: "a".repeat(10 * 1024 * 1024 + 1),
                base64_encoded: false,
                mime_type: None,
            }],
        };
        let body = response_json(upload_handler(AxumState(state), Json(request)).await).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("File too large"));
    }

    #[tokio::test]
    async fn test_upload_warns_on_mime_mismatch() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;

        let request = UploadRequest {
            session_id,
            slot: DocumentSlot::Standard,
            files: vec![UploadFile {
                filename: "standard.txt".to_string(),
                content: STANDARD.encode("still a text file"),
                base64_encoded: true,
                mime_type: Some("application/pdf".to_string()),
            }],
        };
        let body = response_json(upload_handler(AxumState(state), Json(request)).await).await;
        assert_eq!(body["success"], true);
        assert!(!body["warnings"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_reports_extraction_failure() {
        let mut extractor = MockExtractor::new();
        extractor
            .expect_extract()
            .returning(|_| Err(ScengenError::extraction("corrupt file")));

        let state =
            create_test_server_state_with("http://localhost:11434", Arc::new(extractor));
        let session_id = state.api_state.sessions.create().await;

        let request = UploadRequest {
            session_id,
            slot: DocumentSlot::Standard,
            files: vec![text_upload("standard.txt", "whatever")],
        };
        let response = upload_handler(AxumState(state.clone()), Json(request)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("corrupt file"));

        // The slot must stay untouched after a failed extraction
        let session = state.api_state.sessions.get(session_id).await.unwrap();
        assert_eq!(session.text_data, "");
    }

    #[tokio::test]
    async fn test_upload_for_unknown_session() {
        let state = create_test_server_state();

        let request = UploadRequest {
            session_id: Uuid::new_v4(),
            slot: DocumentSlot::Standard,
            files: vec![text_upload("standard.txt", "text")],
        };
        let response = upload_handler(AxumState(state), Json(request)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // =============
    // Preview Tests
    // =============

    #[tokio::test]
    async fn test_preview_placeholder_without_documents() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;

        let preview = preview_handler(AxumState(state), Path(session_id))
            .await
            .unwrap()
            .0;
        assert_eq!(preview.preview, "No Standard Document uploaded");
    }

    #[tokio::test]
    async fn test_preview_appends_reference_docs() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;
        state
            .api_state
            .sessions
            .update(session_id, |s| {
                s.text_data = "standard text".to_string();
                s.additional_text_data = "reference text".to_string();
            })
            .await
            .unwrap();

        let preview = preview_handler(AxumState(state), Path(session_id))
            .await
            .unwrap()
            .0;
        assert_eq!(
            preview.preview,
            "standard text\n\n--- Reference Docs ---\nreference text"
        );
    }

    // ================
    // Generation Tests
    // ================

    #[tokio::test]
    async fn test_generate_without_documents_warns() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;

        let request = GenerateRequest {
            session_id,
            prompt: "Extract KPIs from the document".to_string(),
        };
        let result = generate_handler(AxumState(state.clone()), Json(request))
            .await
            .unwrap()
            .0;
        assert!(!result.success);
        assert_eq!(
            result.warning.as_deref(),
            Some("Please upload at least one document first.")
        );

        // No request was sent and nothing was stored
        let session = state.api_state.sessions.get(session_id).await.unwrap();
        assert_eq!(session.response, "");
        assert_eq!(session.generated_output, "");
    }

    #[tokio::test]
    async fn test_generate_records_scenario() {
        let base_url =
            spawn_model_stub(StatusCode::OK, r#"{"response": "Generated scenario"}"#).await;
        let state = create_test_server_state_with(&base_url, Arc::new(StandardExtractor));
        let session_id = state.api_state.sessions.create().await;
        state
            .api_state
            .sessions
            .update(session_id, |s| s.text_data = "lane keeping".to_string())
            .await
            .unwrap();

        let request = GenerateRequest {
            session_id,
            prompt: "Summarize the logical scenario".to_string(),
        };
        let result = generate_handler(AxumState(state.clone()), Json(request))
            .await
            .unwrap()
            .0;
        assert!(result.success);
        assert_eq!(result.response.as_deref(), Some("Generated scenario"));
        assert!(result.warning.is_none());

        let session = state.api_state.sessions.get(session_id).await.unwrap();
        assert_eq!(session.response, "Generated scenario");

        let record: serde_json::Value = serde_json::from_str(&session.generated_output).unwrap();
        assert_eq!(record["scenario"], "ADAS Logical Scenario");
        assert_eq!(record["prompt"], "Summarize the logical scenario");
        assert_eq!(record["response"], "Generated scenario");
        // Pretty printed with four-space indentation
        assert!(session.generated_output.contains("    \"prompt\""));
    }

    #[tokio::test]
    async fn test_generate_model_error_keeps_prior_output() {
        let base_url = spawn_model_stub(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
        let state = create_test_server_state_with(&base_url, Arc::new(StandardExtractor));
        let session_id = state.api_state.sessions.create().await;
        state
            .api_state
            .sessions
            .update(session_id, |s| {
                s.text_data = "lane keeping".to_string();
                s.generated_output = "prior record".to_string();
            })
            .await
            .unwrap();

        let request = GenerateRequest {
            session_id,
            prompt: "Extract KPIs from the document".to_string(),
        };
        let result = generate_handler(AxumState(state.clone()), Json(request))
            .await
            .unwrap()
            .0;
        assert!(result.success);
        assert_eq!(result.response.as_deref(), Some("Error: 500 - boom"));
        assert!(result.generated_output.is_none());

        let session = state.api_state.sessions.get(session_id).await.unwrap();
        assert_eq!(session.response, "Error: 500 - boom");
        assert_eq!(session.generated_output, "prior record");
    }

    #[tokio::test]
    async fn test_generate_model_error_logs_no_success_event() {
        let base_url = spawn_model_stub(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
        let state = create_test_server_state_with(&base_url, Arc::new(StandardExtractor));
        let session_id = state.api_state.sessions.create().await;
        state
            .api_state
            .sessions
            .update(session_id, |s| s.text_data = "lane keeping".to_string())
            .await
            .unwrap();

        let sink = Arc::new(Mutex::new(Vec::new()));
        let writer = LogSink(sink.clone());
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .finish();

        let request = GenerateRequest {
            session_id,
            prompt: "Extract KPIs from the document".to_string(),
        };
        generate_handler(AxumState(state), Json(request))
            .with_subscriber(subscriber)
            .await
            .unwrap();

        let logs = String::from_utf8(sink.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("GENERATE_ERROR"));
        assert!(!logs.contains("GENERATE_SUCCESS"));
    }

    #[tokio::test]
    async fn test_generate_connection_error_is_inline() {
        // Bind then drop so nothing is listening on the port
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let state = create_test_server_state_with(
            &format!("http://127.0.0.1:{}", port),
            Arc::new(StandardExtractor),
        );
        let session_id = state.api_state.sessions.create().await;
        state
            .api_state
            .sessions
            .update(session_id, |s| s.text_data = "lane keeping".to_string())
            .await
            .unwrap();

        let request = GenerateRequest {
            session_id,
            prompt: "Extract KPIs from the document".to_string(),
        };
        let result = generate_handler(AxumState(state.clone()), Json(request))
            .await
            .unwrap()
            .0;
        assert!(result.success);
        assert!(result
            .response
            .as_deref()
            .unwrap()
            .starts_with("Error connecting to model:"));
        assert!(result.generated_output.is_none());

        let session = state.api_state.sessions.get(session_id).await.unwrap();
        assert!(session.response.starts_with("Error connecting to model:"));
        assert_eq!(session.generated_output, "");
    }

    #[tokio::test]
    async fn test_generate_for_unknown_session() {
        let state = create_test_server_state();

        let request = GenerateRequest {
            session_id: Uuid::new_v4(),
            prompt: "Extract KPIs from the document".to_string(),
        };
        let response = generate_handler(AxumState(state), Json(request))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // ==========
    // Chat Tests
    // ==========

    #[tokio::test]
    async fn test_chat_send_appends_exchange() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;

        let request = ChatSendRequest {
            session_id,
            message: "what is the speed limit".to_string(),
        };
        let result = chat_send_handler(AxumState(state), Json(request))
            .await
            .unwrap()
            .0;
        assert_eq!(
            result.history,
            vec![
                "You: what is the speed limit",
                "Bot: Response to 'what is the speed limit'"
            ]
        );
    }

    #[tokio::test]
    async fn test_chat_send_accepts_empty_message() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;

        let request = ChatSendRequest {
            session_id,
            message: String::new(),
        };
        let result = chat_send_handler(AxumState(state), Json(request))
            .await
            .unwrap()
            .0;
        assert_eq!(result.history, vec!["You: ", "Bot: Response to ''"]);
    }

    #[tokio::test]
    async fn test_chat_clear_resets_history() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;

        let send = ChatSendRequest {
            session_id,
            message: "hello".to_string(),
        };
        chat_send_handler(AxumState(state.clone()), Json(send))
            .await
            .unwrap();

        let result = chat_clear_handler(AxumState(state.clone()), Json(ChatClearRequest { session_id }))
            .await
            .unwrap()
            .0;
        assert!(result.history.is_empty());

        let session = state.api_state.sessions.get(session_id).await.unwrap();
        assert!(session.chat_history.is_empty());
    }

    // ============
    // Export Tests
    // ============

    #[tokio::test]
    async fn test_export_without_output_is_not_found() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;

        let response = export_handler(AxumState(state), Path(session_id)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response_json(response).await;
        assert_eq!(body["error"], "No JSON generated yet.");
    }

    #[tokio::test]
    async fn test_export_serves_stored_record() {
        let state = create_test_server_state();
        let session_id = state.api_state.sessions.create().await;
        let stored = "{\n    \"scenario\": \"ADAS Logical Scenario\"\n}".to_string();
        let expected = stored.clone();
        state
            .api_state
            .sessions
            .update(session_id, move |s| s.generated_output = stored)
            .await
            .unwrap();

        let response = export_handler(AxumState(state), Path(session_id)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains("ADAS_output.json"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(bytes.as_ref(), expected.as_bytes());
    }

    #[tokio::test]
    async fn test_export_for_unknown_session() {
        let state = create_test_server_state();

        let response = export_handler(AxumState(state), Path(Uuid::new_v4())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // =====================
    // Server Surface Tests
    // =====================

    #[tokio::test]
    async fn test_server_serves_index_and_health() {
        // bind an ephemeral port
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = StudioConfig {
            host: "127.0.0.1".to_string(),
            port,
            enable_cors: true,
        };
        let llm = Arc::new(OllamaClient::new(None, None).unwrap());
        let mut server = crate::server::StudioServer::new(
            config,
            SessionStore::new(),
            llm,
            Arc::new(StandardExtractor),
        );
        assert!(!server.is_running());

        server.start().await.unwrap();
        assert!(server.is_running());
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;

        let body = reqwest::get(format!("http://127.0.0.1:{}/", port))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(body.contains("ADAS Logical Scenario Generator"));
        assert!(body.contains("Choose Prompt"));

        let health = reqwest::get(format!("http://127.0.0.1:{}/health", port))
            .await
            .unwrap();
        assert_eq!(health.status(), reqwest::StatusCode::OK);

        server.stop().await.unwrap();
        assert!(!server.is_running());
    }

    #[tokio::test]
    async fn test_server_rejects_double_start() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = StudioConfig {
            host: "127.0.0.1".to_string(),
            port,
            enable_cors: false,
        };
        let llm = Arc::new(OllamaClient::new(None, None).unwrap());
        let mut server = crate::server::StudioServer::new(
            config,
            SessionStore::new(),
            llm,
            Arc::new(StandardExtractor),
        );

        server.start().await.unwrap();
        let second = server.start().await;
        assert!(matches!(second, Err(ScengenError::Config(_))));
        server.stop().await.unwrap();
    }

    #[test]
    fn test_studio_config_from_env() {
        std::env::set_var("SCENGEN_HOST", "0.0.0.0");
        std::env::set_var("SCENGEN_PORT", "9100");
        std::env::set_var("SCENGEN_CORS", "off");
        let config = StudioConfig::from_env();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9100);
        assert!(!config.enable_cors);

        std::env::remove_var("SCENGEN_HOST");
        std::env::remove_var("SCENGEN_PORT");
        std::env::remove_var("SCENGEN_CORS");
        let config = StudioConfig::from_env();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8501);
        assert!(config.enable_cors);
    }
}
