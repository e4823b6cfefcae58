//! Studio server implementation
//!
//! Serves the embedded studio page together with the JSON API behind it:
//! - Session lifecycle
//! - Document upload and preview
//! - Scenario generation and export
//! - CORS support

use super::{
    handlers::{
        chat_clear_handler, chat_send_handler, create_session_handler, export_handler,
        generate_handler, health_check, preview_handler, session_state_handler, upload_handler,
    },
    state::{ApiState, ServerState},
    template::render_index,
};
use axum::{
    response::Html,
    routing::{get, post},
    Router,
};
use scengen_core::{
    get_env_bool, get_env_int, get_env_or, DocumentExtractor, Result, ScengenError, SessionStore,
};
use scengen_provider_ollama::OllamaClient;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// Studio server configuration
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            enable_cors: true,
        }
    }
}

impl StudioConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        Self {
            host: get_env_or("SCENGEN_HOST", "127.0.0.1"),
            port: get_env_int("SCENGEN_PORT", 8501),
            enable_cors: get_env_bool("SCENGEN_CORS", true),
        }
    }
}

/// Studio server service
pub struct StudioServer {
    /// Server configuration
    config: Arc<StudioConfig>,

    /// Shared session store
    sessions: SessionStore,

    /// Model client used for generation
    llm: Arc<OllamaClient>,

    /// Document text extraction collaborator
    extractor: Arc<dyn DocumentExtractor>,

    /// Server state
    state: Option<ServerState>,

    /// Server handle for shutdown
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,

    /// Is the server running
    running: bool,
}

impl StudioServer {
    /// Create new studio server
    pub fn new(
        config: StudioConfig,
        sessions: SessionStore,
        llm: Arc<OllamaClient>,
        extractor: Arc<dyn DocumentExtractor>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            sessions,
            llm,
            extractor,
            state: None,
            shutdown_tx: None,
            running: false,
        }
    }

    /// Build the Axum router
    fn build_router(state: ServerState) -> Router {
        let enable_cors = state.config.enable_cors;

        let mut router = Router::new()
            // Studio page
            .route("/", get(index))
            // Health check
            .route("/health", get(health_check))
            // Session lifecycle
            .route("/api/session", post(create_session_handler))
            .route("/api/session/:session_id", get(session_state_handler))
            // Document upload and preview
            .route("/api/upload", post(upload_handler))
            .route("/api/preview/:session_id", get(preview_handler))
            // Scenario generation
            .route("/api/generate", post(generate_handler))
            // Echo chat
            .route("/api/chat/send", post(chat_send_handler))
            .route("/api/chat/clear", post(chat_clear_handler))
            // Export of the generated record
            .route("/api/export/:session_id", get(export_handler))
            .with_state(state);

        // Add CORS if enabled (outermost layer)
        if enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router = router.layer(cors);
        }

        router
    }

    /// Start the server
    pub async fn start(&mut self) -> Result<()> {
        if self.running {
            return Err(ScengenError::config("Server already running"));
        }

        let state = ServerState {
            api_state: ApiState::new(self.sessions.clone()),
            llm: self.llm.clone(),
            extractor: self.extractor.clone(),
            config: self.config.clone(),
        };

        self.state = Some(state.clone());

        let router = Self::build_router(state);

        let addr = format!("{}:{}", self.config.host, self.config.port);
        info!("Starting studio server on {}", addr);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| ScengenError::config(format!("Failed to bind to {}: {}", addr, e)))?;

        let (tx, rx) = tokio::sync::oneshot::channel();
        self.shutdown_tx = Some(tx);

        // Spawn server task
        tokio::spawn(async move {
            let server = axum::serve(listener, router).with_graceful_shutdown(async {
                let _ = rx.await;
            });
            if let Err(e) = server.await {
                error!("Server error: {}", e);
            }
        });

        self.running = true;
        Ok(())
    }

    /// Stop the server
    pub async fn stop(&mut self) -> Result<()> {
        if !self.running {
            return Ok(());
        }

        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }

        self.running = false;
        self.state = None;

        info!("Studio server stopped");
        Ok(())
    }

    /// Check if server is running
    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Serve the studio page
async fn index() -> Html<String> {
    Html(render_index())
}
