/*!
# PDF Parser

Extracts text content from PDF bytes.
*/

use scengen_core::{Result, ScengenError};
use uuid::Uuid;

pub struct PdfParser;

impl PdfParser {
    /// Parse PDF bytes into plain text
    ///
    /// pdf_extract works with paths, so the bytes go through a temp file
    /// that is removed before returning.
    pub fn parse(bytes: &[u8]) -> Result<String> {
        let temp_dir = std::env::temp_dir();
        let temp_path = temp_dir.join(format!("scenario_pdf_{}.pdf", Uuid::new_v4()));

        if let Err(e) = std::fs::write(&temp_path, bytes) {
            return Err(ScengenError::extraction(format!(
                "Failed to write temp PDF file: {}",
                e
            )));
        }

        let result = pdf_extract::extract_text(&temp_path)
            .map_err(|e| ScengenError::extraction(format!("PDF extraction error: {}", e)));

        // Clean up temp file
        let _ = std::fs::remove_file(&temp_path);

        result
    }
}
