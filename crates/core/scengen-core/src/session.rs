//! Per-session state and the in-memory session store

use crate::{Result, ScengenError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Placeholder shown by the preview when no standard document was uploaded
pub const NO_STANDARD_DOCUMENT: &str = "No Standard Document uploaded";

/// Separator line inserted before reference text in the preview
pub const REFERENCE_DOCS_SEPARATOR: &str = "\n\n--- Reference Docs ---\n";

/// Working state of one studio session
///
/// Each field is mutated only by its owning view's handler. All fields start
/// empty; `chat_history` is the only one with an explicit reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    /// Last model reply, or the inline error text for a failed request
    pub response: String,

    /// Extracted standard document text
    pub text_data: String,

    /// Extracted reference document text
    pub additional_text_data: String,

    /// Last serialized scenario record
    pub generated_output: String,

    /// Chat lines in insertion order
    pub chat_history: Vec<String>,

    /// When the session was created
    pub created_at: DateTime<Utc>,

    /// When the session was last mutated
    pub updated_at: DateTime<Utc>,
}

impl Default for SessionContext {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            response: String::new(),
            text_data: String::new(),
            additional_text_data: String::new(),
            generated_output: String::new(),
            chat_history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl SessionContext {
    /// Create a fresh session with all fields empty
    pub fn new() -> Self {
        Self::default()
    }

    /// True when at least one document slot holds text
    pub fn has_documents(&self) -> bool {
        !self.text_data.is_empty() || !self.additional_text_data.is_empty()
    }

    /// Standard and reference text joined with a blank line
    ///
    /// The separator is unconditional: an empty slot still contributes its
    /// side of the join.
    pub fn combined_text(&self) -> String {
        format!("{}\n\n{}", self.text_data, self.additional_text_data)
    }

    /// Preview text for the upload view
    ///
    /// Standard text (or the placeholder when empty), with reference text
    /// appended after a separator line when present.
    pub fn preview_text(&self) -> String {
        let mut preview = if self.text_data.is_empty() {
            NO_STANDARD_DOCUMENT.to_string()
        } else {
            self.text_data.clone()
        };

        if !self.additional_text_data.is_empty() {
            preview.push_str(REFERENCE_DOCS_SEPARATOR);
            preview.push_str(&self.additional_text_data);
        }

        preview
    }

    /// Append one chat exchange: the user line, then the echo reply
    pub fn record_exchange(&mut self, input: &str) {
        self.chat_history.push(format!("You: {}", input));
        self.chat_history
            .push(format!("Bot: Response to '{}'", input));
    }

    /// Reset the chat history to empty
    pub fn clear_chat(&mut self) {
        self.chat_history.clear();
    }
}

/// Shared in-memory session store
///
/// Sessions are keyed by UUID and live for the process lifetime. Mutation
/// goes through [`SessionStore::update`], which serializes writers behind
/// one lock.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionContext>>>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a new session and return its id
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions
            .write()
            .await
            .insert(id, SessionContext::new());
        id
    }

    /// Snapshot a session by id
    pub async fn get(&self, id: Uuid) -> Option<SessionContext> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Mutate a session in place and return the updated snapshot
    pub async fn update<F>(&self, id: Uuid, mutate: F) -> Result<SessionContext>
    where
        F: FnOnce(&mut SessionContext),
    {
        let mut guard = self.sessions.write().await;
        let session = guard
            .get_mut(&id)
            .ok_or_else(|| ScengenError::not_found(format!("Unknown session: {}", id)))?;

        mutate(session);
        session.updated_at = Utc::now();

        Ok(session.clone())
    }

    /// Number of live sessions
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
