//! State types for the studio API
//!
//! Shared state structures used by server and handlers

use scengen_core::{DocumentExtractor, SessionStore};
use scengen_provider_ollama::OllamaClient;
use std::sync::Arc;
use std::time::Instant;

/// Shared state for API handlers
#[derive(Clone)]
pub struct ApiState {
    /// Session store
    pub sessions: SessionStore,

    /// Server start time
    pub start_time: Instant,
}

impl ApiState {
    /// Create new API state
    pub fn new(sessions: SessionStore) -> Self {
        Self {
            sessions,
            start_time: Instant::now(),
        }
    }
}

/// Studio server state
#[derive(Clone)]
pub struct ServerState {
    /// API state (sessions, etc.)
    pub api_state: ApiState,

    /// Model client
    pub llm: Arc<OllamaClient>,

    /// Document extraction collaborator
    pub extractor: Arc<dyn DocumentExtractor>,

    /// Configuration
    pub config: Arc<super::server::StudioConfig>,
}
