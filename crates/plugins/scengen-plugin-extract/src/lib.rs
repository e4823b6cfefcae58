/*!
# Document Extraction Plugin

Turns uploaded scenario documents into plain text:

- **PDF**: text extraction through pdf-extract
- **Plain text**: lossy UTF-8 decoding

DOCX uploads are accepted at the API boundary but have no extractor here,
so they surface a clear extraction error instead of silently ingesting
garbage.

## Example Usage

```rust
use scengen_core::{DocumentExtractor, DocumentKind, UploadedDocument};
use scengen_plugin_extract::StandardExtractor;

let extractor = StandardExtractor;
let docs = vec![UploadedDocument::new(
    "notes.txt",
    DocumentKind::Text,
    b"lane change on highway".to_vec(),
)];
let text = extractor.extract(&docs).unwrap();
assert_eq!(text, "lane change on highway");
```
*/

#![warn(clippy::all)]

pub mod pdf;
pub mod text;

pub use pdf::PdfParser;
pub use text::TextParser;

use scengen_core::{DocumentExtractor, DocumentKind, Result, ScengenError, UploadedDocument};

/// Default extractor wired into the studio server
pub struct StandardExtractor;

impl DocumentExtractor for StandardExtractor {
    fn extract(&self, documents: &[UploadedDocument]) -> Result<String> {
        let mut parts = Vec::with_capacity(documents.len());

        for doc in documents {
            tracing::debug!(
                "Extracting text from {} ({:?}, {} bytes)",
                doc.filename,
                doc.kind,
                doc.bytes.len()
            );

            let extracted = match doc.kind {
                DocumentKind::Pdf => PdfParser::parse(&doc.bytes)?,
                DocumentKind::Text => TextParser::parse(&doc.bytes),
                DocumentKind::Docx => {
                    return Err(ScengenError::extraction(format!(
                        "DOCX extraction is not supported yet: {}",
                        doc.filename
                    )));
                }
            };

            parts.push(extracted);
        }

        Ok(parts.join("\n\n"))
    }
}
