/*!
# Text Parser

Plain text decoding for uploaded files.
*/

pub struct TextParser;

impl TextParser {
    /// Decode text bytes, replacing invalid UTF-8 sequences
    pub fn parse(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
