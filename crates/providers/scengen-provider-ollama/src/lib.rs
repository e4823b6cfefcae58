//! Ollama Model Integration
//!
//! Talks to a locally hosted Ollama server over its HTTP generate API.
//! Requests are sent non-streaming, so each prompt yields one JSON reply
//! and no user document text ever leaves the machine.

#![warn(missing_docs)]
#![warn(clippy::all)]

use reqwest::Client;
use scengen_core::{Result, ScengenError};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

/// Default Ollama endpoint
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default model served by Ollama
pub const DEFAULT_MODEL: &str = "llama3";

/// Reply text used when the model omits the response field
pub const NO_RESPONSE: &str = "No response.";

/// Shared HTTP client for connection pooling to the Ollama server
static HTTP_CLIENT: OnceLock<Arc<Client>> = OnceLock::new();

/// Get or initialize the shared HTTP client
/// Returns Arc<Client> to avoid cloning and maintain connection pooling
fn get_http_client() -> Arc<Client> {
    HTTP_CLIENT
        .get_or_init(|| {
            Arc::new(
                Client::builder()
                    .pool_max_idle_per_host(50)
                    .pool_idle_timeout(std::time::Duration::from_secs(300))
                    .tcp_keepalive(std::time::Duration::from_secs(60))
                    .timeout(std::time::Duration::from_secs(300))
                    .connect_timeout(std::time::Duration::from_secs(10))
                    .build()
                    .unwrap_or_else(|e| {
                        panic!(
                            "Failed to create HTTP client: {}. This is a configuration error.",
                            e
                        )
                    }),
            )
        })
        .clone()
}

/// Ollama generate API request
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
}

/// Ollama generate API reply
#[derive(Debug, Deserialize)]
struct OllamaReply {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    done: bool,
}

/// Client for the Ollama generate endpoint
pub struct OllamaClient {
    client: Arc<Client>,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Create a new client with shared connection pool
    ///
    /// # Arguments
    /// * `base_url` - Optional base URL (defaults to the standard Ollama port)
    /// * `model` - Optional model name (defaults to llama3)
    ///
    /// # Errors
    /// Returns an error if the base URL or model name is invalid
    pub fn new(base_url: Option<String>, model: Option<String>) -> Result<Self> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::validate_url(&base_url)?;

        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Self::validate_model_name(&model)?;

        Ok(Self {
            client: get_http_client(),
            base_url,
            model,
        })
    }

    /// Base URL this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Model name sent with each request
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Validate URL format
    pub fn validate_url(url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(ScengenError::config("Base URL cannot be empty"));
        }

        // Check length before parsing
        if url.len() > 2048 {
            return Err(ScengenError::config("URL is too long (max 2048 characters)"));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ScengenError::config(format!(
                "Invalid URL format: '{}'. Must start with http:// or https://",
                url
            )));
        }

        Ok(())
    }

    /// Validate model name (basic sanitization)
    pub fn validate_model_name(name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(ScengenError::config("Model name cannot be empty"));
        }

        if name.len() > 256 {
            return Err(ScengenError::config(
                "Model name is too long (max 256 characters)",
            ));
        }

        // Check for potentially dangerous characters
        if name.contains('\0') || name.contains('\n') || name.contains('\r') {
            return Err(ScengenError::config("Model name contains invalid characters"));
        }

        Ok(())
    }

    /// Send one prompt and return the model's reply text
    ///
    /// A 2xx reply with no response field yields [`NO_RESPONSE`]. A non-2xx
    /// status becomes [`ScengenError::ModelStatus`] carrying the status code
    /// and body text; transport and decode failures surface as network
    /// errors.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        if prompt.is_empty() {
            return Err(ScengenError::validation("Prompt cannot be empty"));
        }

        let request = OllamaRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let url = format!("{}/api/generate", self.base_url);
        tracing::debug!(
            "Sending generate request to {} with model {}",
            url,
            self.model
        );

        let resp = self.client.post(&url).json(&request).send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {}", e));
            return Err(ScengenError::model_status(status, body));
        }

        let reply: OllamaReply = resp.json().await?;
        Ok(reply.response.unwrap_or_else(|| NO_RESPONSE.to_string()))
    }
}
