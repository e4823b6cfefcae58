//! Error types for the scenario studio

use thiserror::Error;

/// Main error type for studio operations
#[derive(Debug, Error)]
pub enum ScengenError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Session lookup or mutation error
    #[error("Session error: {0}")]
    Session(String),

    /// Document text extraction error
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Model/LLM error
    #[error("Model error: {0}")]
    Model(String),

    /// Non-success status from the generation endpoint
    #[error("Model endpoint returned status {status}: {body}")]
    ModelStatus {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Not found error (generic)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Convenient Result type using ScengenError
pub type Result<T> = std::result::Result<T, ScengenError>;

impl ScengenError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        ScengenError::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        ScengenError::Validation(msg.into())
    }

    /// Create a session error
    pub fn session(msg: impl Into<String>) -> Self {
        ScengenError::Session(msg.into())
    }

    /// Create an extraction error
    pub fn extraction(msg: impl Into<String>) -> Self {
        ScengenError::Extraction(msg.into())
    }

    /// Create a model error
    pub fn model(msg: impl Into<String>) -> Self {
        ScengenError::Model(msg.into())
    }

    /// Create a model status error from an HTTP reply
    pub fn model_status(status: u16, body: impl Into<String>) -> Self {
        ScengenError::ModelStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        ScengenError::NotFound(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        ScengenError::Other(msg.into())
    }
}
