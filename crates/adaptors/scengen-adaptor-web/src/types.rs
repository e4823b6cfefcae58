//! Types for the studio API
//!
//! Defines request and response structures for the studio endpoints

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Document slot targeted by an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSlot {
    /// Primary standard document text
    Standard,
    /// Supporting reference document text
    Reference,
}

/// Response from session creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    /// Success status
    pub success: bool,

    /// Created session ID
    pub session_id: Uuid,
}

impl CreateSessionResponse {
    /// Create a success response
    pub fn success(session_id: Uuid) -> Self {
        Self {
            success: true,
            session_id,
        }
    }
}

/// Session snapshot returned by the session endpoint
///
/// Document slots are reported as character counts, not the extracted text;
/// the preview endpoint is the one surface that serves the text itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshotResponse {
    /// Success status
    pub success: bool,

    /// Session ID
    pub session_id: Uuid,

    /// Last model reply or inline error text
    pub response: String,

    /// Characters of extracted standard document text
    pub text_chars: usize,

    /// Characters of extracted reference document text
    pub additional_text_chars: usize,

    /// Last serialized scenario record
    pub generated_output: String,

    /// Chat lines in insertion order
    pub chat_history: Vec<String>,

    /// When the session was created (RFC 3339)
    pub created_at: String,

    /// When the session was last mutated (RFC 3339)
    pub updated_at: String,
}

impl SessionSnapshotResponse {
    /// Build a snapshot from a stored session
    pub fn from_session(session_id: Uuid, session: &scengen_core::SessionContext) -> Self {
        Self {
            success: true,
            session_id,
            response: session.response.clone(),
            text_chars: session.text_data.chars().count(),
            additional_text_chars: session.additional_text_data.chars().count(),
            generated_output: session.generated_output.clone(),
            chat_history: session.chat_history.clone(),
            created_at: session.created_at.to_rfc3339(),
            updated_at: session.updated_at.to_rfc3339(),
        }
    }
}

/// One uploaded file within an upload request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFile {
    /// Original filename including extension
    pub filename: String,

    /// File content, base64 encoded when the flag is set
    pub content: String,

    /// Whether content is base64 encoded
    #[serde(default)]
    #[serde(alias = "base64_encoded")]
    pub base64_encoded: bool,

    /// MIME type reported by the browser
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "mime_type")]
    pub mime_type: Option<String>,
}

/// Request to upload one or more documents into a slot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// Session ID
    #[serde(alias = "session_id")]
    pub session_id: Uuid,

    /// Target document slot
    pub slot: DocumentSlot,

    /// Files to extract, in upload order
    pub files: Vec<UploadFile>,
}

/// Response from document upload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Success status
    pub success: bool,

    /// Slot that was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<DocumentSlot>,

    /// Characters of extracted text stored in the slot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<usize>,

    /// Error message if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Warnings (e.g., MIME type mismatch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

impl UploadResponse {
    /// Create a success response
    pub fn success(slot: DocumentSlot, characters: usize) -> Self {
        Self {
            success: true,
            slot: Some(slot),
            characters: Some(characters),
            error: None,
            warnings: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            slot: None,
            characters: None,
            error: Some(message.into()),
            warnings: None,
        }
    }

    /// Add warnings
    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = if warnings.is_empty() {
            None
        } else {
            Some(warnings)
        };
        self
    }
}

/// Response from the document preview endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    /// Success status
    pub success: bool,

    /// Combined preview text
    pub preview: String,
}

/// Request to generate a scenario from the uploaded documents
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Session ID
    #[serde(alias = "session_id")]
    pub session_id: Uuid,

    /// Custom prompt text, usually seeded from a canned prompt
    pub prompt: String,
}

/// Response from scenario generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Success status
    pub success: bool,

    /// Model reply, or the inline error text for a failed request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    /// Serialized scenario record, present only when generation succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_output: Option<String>,

    /// Warning shown instead of sending a request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl GenerateResponse {
    /// Create a response for a completed trigger
    ///
    /// `generated_output` is None when the model call failed and the stored
    /// record was left untouched.
    pub fn completed(response: String, generated_output: Option<String>) -> Self {
        Self {
            success: true,
            response: Some(response),
            generated_output,
            warning: None,
        }
    }

    /// Create a warning response for a trigger that sent no request
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            generated_output: None,
            warning: Some(message.into()),
        }
    }
}

/// Request to append a chat exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSendRequest {
    /// Session ID
    #[serde(alias = "session_id")]
    pub session_id: Uuid,

    /// User input line
    pub message: String,
}

/// Request to clear the chat history
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatClearRequest {
    /// Session ID
    #[serde(alias = "session_id")]
    pub session_id: Uuid,
}

/// Response from chat mutations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// Success status
    pub success: bool,

    /// Full chat history in insertion order
    pub history: Vec<String>,
}

impl ChatResponse {
    /// Create a success response
    pub fn success(history: Vec<String>) -> Self {
        Self {
            success: true,
            history,
        }
    }
}

/// Response from the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Server uptime in seconds
    pub uptime: u64,

    /// Number of live sessions
    pub sessions: usize,

    /// Current timestamp (RFC 3339)
    pub timestamp: String,
}
