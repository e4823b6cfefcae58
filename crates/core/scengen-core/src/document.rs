//! Upload document kinds and the extraction collaborator contract

use crate::Result;
use serde::{Deserialize, Serialize};

/// Supported upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// PDF document
    Pdf,
    /// Plain text
    Text,
    /// Word document
    Docx,
}

impl DocumentKind {
    /// Get allowed file extensions for this kind
    pub fn allowed_extensions(&self) -> &[&str] {
        match self {
            Self::Pdf => &["pdf"],
            Self::Text => &["txt"],
            Self::Docx => &["docx"],
        }
    }

    /// Infer document kind from filename
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = filename.rsplit('.').next()?.to_lowercase();
        [Self::Pdf, Self::Text, Self::Docx]
            .into_iter()
            .find(|kind| kind.allowed_extensions().contains(&ext.as_str()))
    }

    /// Check if a MIME type is plausible for this document kind
    pub fn valid_mime_type(&self, mime: &str) -> bool {
        let mime_lower = mime.to_lowercase();
        match self {
            Self::Pdf => {
                mime_lower.starts_with("application/pdf")
                    || mime_lower.starts_with("application/octet-stream")
            }
            Self::Text => {
                mime_lower.starts_with("text/plain")
                    || mime_lower.starts_with("application/octet-stream")
            }
            Self::Docx => {
                mime_lower
                    .starts_with("application/vnd.openxmlformats-officedocument.wordprocessingml")
                    || mime_lower.starts_with("application/msword")
                    || mime_lower.starts_with("application/octet-stream")
            }
        }
    }

    /// Check if this kind is binary and requires base64-encoded upload content
    pub fn requires_base64(&self) -> bool {
        matches!(self, Self::Pdf | Self::Docx)
    }
}

/// One uploaded file, decoded and ready for extraction
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    /// Sanitized filename
    pub filename: String,

    /// Document kind inferred from the filename
    pub kind: DocumentKind,

    /// Raw file bytes
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    /// Create an uploaded document
    pub fn new(filename: impl Into<String>, kind: DocumentKind, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            kind,
            bytes,
        }
    }
}

/// Collaborator contract for turning an uploaded file set into one text blob
///
/// The upload handler depends only on this trait; implementations decide how
/// each format is read. Per-file texts are joined with a blank line.
pub trait DocumentExtractor: Send + Sync {
    /// Extract text from the uploaded set
    fn extract(&self, documents: &[UploadedDocument]) -> Result<String>;
}
