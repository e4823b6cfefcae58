//! Export record built after a successful generation

use crate::{Result, ScengenError};
use serde::{Deserialize, Serialize};

/// Constant label stamped on every export record
pub const SCENARIO_LABEL: &str = "ADAS Logical Scenario";

/// Filename offered by the export download
pub const EXPORT_FILE_NAME: &str = "ADAS_output.json";

/// Content type of the export download
pub const EXPORT_CONTENT_TYPE: &str = "application/json";

/// The downloadable result of the last successful generation
///
/// Field order is part of the output format: scenario, prompt, response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRecord {
    /// Constant scenario label
    pub scenario: String,

    /// Custom prompt text used for the request
    pub prompt: String,

    /// Model reply text
    pub response: String,
}

impl ScenarioRecord {
    /// Create a record for a generation result
    pub fn new(prompt: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            scenario: SCENARIO_LABEL.to_string(),
            prompt: prompt.into(),
            response: response.into(),
        }
    }

    /// Serialize with 4-space indentation
    ///
    /// The default pretty printer indents with 2 spaces; the export format
    /// uses 4.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf)
            .map_err(|e| ScengenError::other(format!("Export record is not valid UTF-8: {}", e)))
    }
}
