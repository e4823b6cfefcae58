//! ADAS Scenario Studio Core
//!
//! This crate provides the session state, prompt constants, and shared
//! contracts for the scenario studio service. It includes:
//!
//! - Per-session context with the studio's five working fields
//! - An in-memory session store keyed by UUID
//! - Navigation view labels and parsing
//! - The expert preamble, canned prompts, and final-prompt composition
//! - The export record with its 4-space-indented serialization
//! - Document kinds and the text-extraction collaborator contract
//! - Error types, env configuration helpers, and logging setup
//!
//! # Example: Session round trip
//!
//! ```no_run
//! use scengen_core::{Result, SessionStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let store = SessionStore::new();
//!     let id = store.create().await;
//!     store
//!         .update(id, |session| session.record_exchange("hello"))
//!         .await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export commonly used types
pub use uuid::Uuid;

// Core modules
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod logger;
pub mod prompts;
pub mod session;
pub mod view;

// Re-export main types
pub use config::{get_env_bool, get_env_int, get_env_or, load_env};
pub use document::{DocumentExtractor, DocumentKind, UploadedDocument};
pub use error::{Result, ScengenError};
pub use export::{ScenarioRecord, EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME, SCENARIO_LABEL};
pub use logger::init_logging;
pub use prompts::{compose_final_prompt, EXPERT_PROMPT, USER_PROMPTS};
pub use session::{SessionContext, SessionStore};
pub use view::View;
