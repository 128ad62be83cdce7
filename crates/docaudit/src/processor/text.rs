use crate::error::ProcessError;
use crate::processor::{DocumentFormat, DocumentProcessor};

/// Plain-text and Markdown uploads. Invalid UTF-8 is decoded lossily.
pub struct PlainTextProcessor;

impl PlainTextProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentProcessor for PlainTextProcessor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ProcessError> {
        let text = match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "text document is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(bytes).into_owned()
            }
        };
        Ok(text)
    }

    fn supports(&self, format: DocumentFormat) -> bool {
        matches!(format, DocumentFormat::Text)
    }
}
