//! Request handlers for the studio API
//!
//! Implements the endpoint logic behind each user action

use super::{state::ServerState, types::*};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use scengen_core::{
    compose_final_prompt, DocumentKind, ScenarioRecord, ScengenError, SessionContext,
    UploadedDocument, EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME,
};
use tracing::{error, info};
use uuid::Uuid;

/// Security limits for document upload
const UPLOAD_MAX_FILE_SIZE: usize = 10 * 1024 * 1024; // 10 MB max
const UPLOAD_MAX_FILENAME_LENGTH: usize = 255;

/// Warning shown when generation is triggered without any document text
const WARN_NO_DOCUMENTS: &str = "Please upload at least one document first.";

/// Validate and sanitize an uploaded filename
fn validate_filename(filename: &str) -> std::result::Result<String, String> {
    // Check length
    if filename.is_empty() {
        return Err("Filename cannot be empty".to_string());
    }
    if filename.len() > UPLOAD_MAX_FILENAME_LENGTH {
        return Err(format!(
            "Filename too long (max {} characters)",
            UPLOAD_MAX_FILENAME_LENGTH
        ));
    }

    // Sanitize: remove path components and dangerous characters
    let sanitized: String = filename
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '.' || *c == '_' || *c == '-' || *c == ' ')
        .collect();

    // Extract just the filename (no path)
    let sanitized = sanitized
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(&sanitized)
        .trim()
        .to_string();

    if sanitized.is_empty() {
        return Err("Invalid filename after sanitization".to_string());
    }

    // Prevent directory traversal
    if sanitized.contains("..") {
        return Err("Invalid filename: path traversal detected".to_string());
    }

    Ok(sanitized)
}

/// Health check endpoint
pub async fn health_check(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uptime: state.api_state.start_time.elapsed().as_secs(),
        sessions: state.api_state.sessions.count().await,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Create a fresh session with all fields empty
pub async fn create_session_handler(
    State(server_state): State<ServerState>,
) -> Json<CreateSessionResponse> {
    let session_id = server_state.api_state.sessions.create().await;
    info!("SESSION_CREATE session_id={}", session_id);
    Json(CreateSessionResponse::success(session_id))
}

/// Return the full state of one session
pub async fn session_state_handler(
    State(server_state): State<ServerState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSnapshotResponse>, ApiError> {
    let session = fetch_session(&server_state, session_id).await?;
    Ok(Json(SessionSnapshotResponse::from_session(
        session_id, &session,
    )))
}

/// Document upload handler
///
/// Validates each file, extracts text through the configured collaborator,
/// and overwrites the targeted slot with the combined result.
pub async fn upload_handler(
    State(server_state): State<ServerState>,
    Json(request): Json<UploadRequest>,
) -> Response {
    let mut warnings: Vec<String> = Vec::new();

    info!(
        "UPLOAD_START session_id={} slot={:?} files={}",
        request.session_id,
        request.slot,
        request.files.len()
    );

    if request.files.is_empty() {
        error!("UPLOAD_ERROR no files provided");
        return Json(UploadResponse::error("No files provided")).into_response();
    }

    let mut documents = Vec::with_capacity(request.files.len());
    for file in &request.files {
        // Validate filename
        let filename = match validate_filename(&file.filename) {
            Ok(f) => f,
            Err(e) => {
                error!("UPLOAD_ERROR filename validation failed: {}", e);
                return Json(UploadResponse::error(format!("Invalid filename: {}", e)))
                    .into_response();
            }
        };

        // Determine document kind from the extension
        let kind = match DocumentKind::from_filename(&filename) {
            Some(k) => k,
            None => {
                error!("UPLOAD_ERROR unsupported file type for {}", filename);
                return Json(UploadResponse::error(
                    "Unsupported file type. Allowed: .pdf, .txt, .docx",
                ))
                .into_response();
            }
        };

        // Validate MIME type if provided
        if let Some(ref mime) = file.mime_type {
            if !kind.valid_mime_type(mime) {
                warnings.push(format!(
                    "MIME type '{}' may not match document type {:?}",
                    mime, kind
                ));
            }
        }

        // Decode content - binary formats must arrive base64 encoded
        let bytes = if file.base64_encoded {
            match STANDARD.decode(&file.content) {
                Ok(b) => b,
                Err(_) => {
                    error!("UPLOAD_ERROR invalid base64 encoding for {}", filename);
                    return Json(UploadResponse::error("Invalid base64 encoding"))
                        .into_response();
                }
            }
        } else {
            if kind.requires_base64() {
                error!(
                    "UPLOAD_ERROR {:?} upload must be base64 encoded: {}",
                    kind, filename
                );
                return Json(UploadResponse::error(format!(
                    "{:?} uploads must be base64 encoded",
                    kind
                )))
                .into_response();
            }
            file.content.clone().into_bytes()
        };

        if bytes.len() > UPLOAD_MAX_FILE_SIZE {
            error!(
                "UPLOAD_ERROR file too large: {} ({} bytes)",
                filename,
                bytes.len()
            );
            return Json(UploadResponse::error(format!(
                "File too large (max {} bytes)",
                UPLOAD_MAX_FILE_SIZE
            )))
            .into_response();
        }

        documents.push(UploadedDocument::new(filename, kind, bytes));
    }

    let extracted = match server_state.extractor.extract(&documents) {
        Ok(text) => text,
        Err(e) => {
            error!("UPLOAD_ERROR extraction failed: {}", e);
            return Json(UploadResponse::error(format!(
                "Failed to extract text: {}",
                e
            )))
            .into_response();
        }
    };

    let characters = extracted.chars().count();
    let slot = request.slot;

    let update = server_state
        .api_state
        .sessions
        .update(request.session_id, move |s| match slot {
            DocumentSlot::Standard => s.text_data = extracted,
            DocumentSlot::Reference => s.additional_text_data = extracted,
        })
        .await;

    if let Err(e) = update {
        error!("UPLOAD_ERROR {}", e);
        return ApiError::from(e).into_response();
    }

    info!(
        "UPLOAD_SUCCESS session_id={} slot={:?} characters={}",
        request.session_id, slot, characters
    );

    Json(UploadResponse::success(slot, characters).with_warnings(warnings)).into_response()
}

/// Combined document preview for the upload view
pub async fn preview_handler(
    State(server_state): State<ServerState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<PreviewResponse>, ApiError> {
    let session = fetch_session(&server_state, session_id).await?;
    Ok(Json(PreviewResponse {
        success: true,
        preview: session.preview_text(),
    }))
}

/// Scenario generation handler
///
/// Composes the final prompt from the expert preamble, the custom prompt,
/// and the combined document text, then issues one model request. Model
/// failures are recorded as inline error text in the session response while
/// the stored scenario record keeps its prior value.
pub async fn generate_handler(
    State(server_state): State<ServerState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    info!("GENERATE_START session_id={}", request.session_id);

    let session = fetch_session(&server_state, request.session_id).await?;

    if !session.has_documents() {
        info!(
            "GENERATE_BLOCKED session_id={} no documents uploaded",
            request.session_id
        );
        return Ok(Json(GenerateResponse::warning(WARN_NO_DOCUMENTS)));
    }

    let final_prompt = compose_final_prompt(&request.prompt, &session.combined_text());

    let (response_text, new_output) = match server_state.llm.generate(&final_prompt).await {
        Ok(reply) => {
            let record = ScenarioRecord::new(request.prompt.clone(), reply.clone());
            let serialized = record.to_pretty_json()?;
            (reply, Some(serialized))
        }
        Err(ScengenError::ModelStatus { status, body }) => {
            error!(
                "GENERATE_ERROR session_id={} model returned status {}",
                request.session_id, status
            );
            (format!("Error: {} - {}", status, body), None)
        }
        Err(ScengenError::Network(e)) => {
            error!("GENERATE_ERROR session_id={} {}", request.session_id, e);
            (format!("Error connecting to model: {}", e), None)
        }
        Err(e) => {
            error!("GENERATE_ERROR session_id={} {}", request.session_id, e);
            (format!("Error connecting to model: {}", e), None)
        }
    };

    let output_for_session = new_output.clone();
    let updated = server_state
        .api_state
        .sessions
        .update(request.session_id, move |s| {
            s.response = response_text;
            if let Some(output) = output_for_session {
                s.generated_output = output;
            }
        })
        .await?;

    if new_output.is_some() {
        info!(
            "GENERATE_SUCCESS session_id={} response_chars={}",
            request.session_id,
            updated.response.chars().count()
        );
    }

    Ok(Json(GenerateResponse::completed(
        updated.response,
        new_output,
    )))
}

/// Append one chat exchange: the user line plus the echo reply
pub async fn chat_send_handler(
    State(server_state): State<ServerState>,
    Json(request): Json<ChatSendRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    info!("CHAT_SEND session_id={}", request.session_id);

    let session = server_state
        .api_state
        .sessions
        .update(request.session_id, |s| s.record_exchange(&request.message))
        .await?;

    Ok(Json(ChatResponse::success(session.chat_history)))
}

/// Reset the chat history to empty
pub async fn chat_clear_handler(
    State(server_state): State<ServerState>,
    Json(request): Json<ChatClearRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    info!("CHAT_CLEAR session_id={}", request.session_id);

    let session = server_state
        .api_state
        .sessions
        .update(request.session_id, |s| s.clear_chat())
        .await?;

    Ok(Json(ChatResponse::success(session.chat_history)))
}

/// Download the last generated scenario record
///
/// Serves the stored string byte for byte, as an attachment named after the
/// fixed export filename. An empty record is reported as not found.
pub async fn export_handler(
    State(server_state): State<ServerState>,
    Path(session_id): Path<Uuid>,
) -> Response {
    let session = match server_state.api_state.sessions.get(session_id).await {
        Some(s) => s,
        None => {
            return ApiError::NotFound(format!("Unknown session: {}", session_id)).into_response()
        }
    };

    if session.generated_output.is_empty() {
        info!("EXPORT_EMPTY session_id={}", session_id);
        return ApiError::NotFound("No JSON generated yet.".to_string()).into_response();
    }

    info!(
        "EXPORT_SUCCESS session_id={} bytes={}",
        session_id,
        session.generated_output.len()
    );

    (
        [
            (header::CONTENT_TYPE, EXPORT_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        session.generated_output,
    )
        .into_response()
}

async fn fetch_session(
    server_state: &ServerState,
    session_id: Uuid,
) -> Result<SessionContext, ApiError> {
    server_state
        .api_state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Unknown session: {}", session_id)))
}

/// API error types
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "success": false,
            "error": message,
            "code": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<ScengenError> for ApiError {
    fn from(err: ScengenError) -> Self {
        error!("ScengenError: {}", err);
        match err {
            ScengenError::NotFound(msg) => ApiError::NotFound(msg),
            ScengenError::Validation(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
