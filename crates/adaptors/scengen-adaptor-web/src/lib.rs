//! Web studio adaptor
//!
//! Serves the scenario studio as a single HTML page backed by a JSON API,
//! keeping all page state on the server behind a session id.
//!
//! # Features
//!
//! - **Embedded UI**: One baked-in page, no asset pipeline
//! - **Sessions**: Per-visitor state with UUID keys
//! - **Uploads**: Base64 document upload with filename validation
//! - **Generation**: Prompt composition and model requests through one client
//! - **Export**: Byte-for-byte download of the stored scenario record
//! - **CORS**: Configurable CORS for frontend integration
//!
//! # Endpoints
//!
//! - `GET /` - Studio page
//! - `GET /health` - Health check
//! - `POST /api/session` - Create a session
//! - `GET /api/session/:session_id` - Full session snapshot
//! - `POST /api/upload` - Upload documents into a slot
//! - `GET /api/preview/:session_id` - Combined document preview
//! - `POST /api/generate` - Generate a logical scenario
//! - `POST /api/chat/send` - Append a chat exchange
//! - `POST /api/chat/clear` - Reset the chat history
//! - `GET /api/export/:session_id` - Download the generated record
//!
//! # Example
//!
//! ```no_run
//! use scengen_adaptor_web::{StudioConfig, StudioServer};
//! use scengen_core::SessionStore;
//! use scengen_plugin_extract::StandardExtractor;
//! use scengen_provider_ollama::OllamaClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> scengen_core::Result<()> {
//!     let sessions = SessionStore::new();
//!     let llm = Arc::new(OllamaClient::new(None, None)?);
//!
//!     let config = StudioConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 8501,
//!         ..Default::default()
//!     };
//!
//!     let mut server = StudioServer::new(config, sessions, llm, Arc::new(StandardExtractor));
//!     server.start().await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod handlers;
pub mod server;
pub mod state;
pub mod template;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export main types
pub use handlers::ApiError;
pub use server::{StudioConfig, StudioServer};
pub use state::{ApiState, ServerState};
pub use types::{
    ChatClearRequest, ChatResponse, ChatSendRequest, CreateSessionResponse, DocumentSlot,
    GenerateRequest, GenerateResponse, HealthResponse, PreviewResponse, SessionSnapshotResponse,
    UploadFile, UploadRequest, UploadResponse,
};
