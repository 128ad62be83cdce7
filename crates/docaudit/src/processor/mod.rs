pub mod pdf;
pub mod text;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ProcessError;

/// Default upper bound on accepted document size (10 MiB).
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Text,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" | "text" | "md" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn from_filename(filename: &str) -> Option<Self> {
        Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Turns raw document bytes into plain text. Blocking; the registry runs
/// it off the async executor.
pub trait DocumentProcessor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ProcessError>;
    fn supports(&self, format: DocumentFormat) -> bool;
}

/// Text-extraction collaborator consumed by the analyzer.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: &[u8], filename: &str) -> Result<String, ProcessError>;
}

/// Routes documents to a processor by file extension.
pub struct ExtractorRegistry {
    processors: Vec<Arc<dyn DocumentProcessor>>,
    max_document_bytes: usize,
}

impl ExtractorRegistry {
    pub fn new(max_document_bytes: usize) -> Self {
        let processors: Vec<Arc<dyn DocumentProcessor>> = vec![
            Arc::new(pdf::PdfProcessor::new()),
            Arc::new(text::PlainTextProcessor::new()),
        ];

        Self {
            processors,
            max_document_bytes,
        }
    }

    fn processor_for(&self, filename: &str) -> Result<Arc<dyn DocumentProcessor>, ProcessError> {
        let unsupported = || {
            let extension = Path::new(filename)
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("");
            ProcessError::UnsupportedFormat(extension.to_string())
        };

        let format = DocumentFormat::from_filename(filename).ok_or_else(unsupported)?;

        self.processors
            .iter()
            .find(|p| p.supports(format))
            .cloned()
            .ok_or_else(unsupported)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DOCUMENT_BYTES)
    }
}

#[async_trait]
impl TextExtractor for ExtractorRegistry {
    async fn extract(&self, bytes: &[u8], filename: &str) -> Result<String, ProcessError> {
        if bytes.is_empty() {
            return Err(ProcessError::EmptyDocument(filename.to_string()));
        }
        if bytes.len() > self.max_document_bytes {
            return Err(ProcessError::DocumentTooLarge {
                filename: filename.to_string(),
                size: bytes.len(),
                limit: self.max_document_bytes,
            });
        }

        let processor = self.processor_for(filename)?;
        let bytes = bytes.to_vec();

        tokio::task::spawn_blocking(move || processor.extract_text(&bytes))
            .await
            .map_err(|e| ProcessError::TextExtraction(format!("extraction task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_extension("PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_extension("md"), Some(DocumentFormat::Text));
        assert_eq!(DocumentFormat::from_extension("docx"), None);
        assert_eq!(
            DocumentFormat::from_filename("scan.final.pdf"),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(DocumentFormat::from_filename("noextension"), None);
    }

    #[tokio::test]
    async fn test_registry_routes_text_format() {
        let registry = ExtractorRegistry::default();
        let text = registry
            .extract(b"Invoice Number: 42", "invoice.txt")
            .await
            .unwrap();
        assert_eq!(text, "Invoice Number: 42");
    }

    #[tokio::test]
    async fn test_registry_routes_by_final_extension() {
        let registry = ExtractorRegistry::default();
        let text = registry
            .extract(b"Quarterly report", "/tmp/archive.v2/Q3.REPORT.TXT")
            .await
            .unwrap();
        assert_eq!(text, "Quarterly report");
    }

    #[tokio::test]
    async fn test_unsupported_format_error() {
        let registry = ExtractorRegistry::default();
        match registry.extract(b"data", "photo.xyz").await {
            Err(ProcessError::UnsupportedFormat(ext)) => assert_eq!(ext, "xyz"),
            other => panic!("Expected UnsupportedFormat error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_no_extension_error() {
        let registry = ExtractorRegistry::default();
        match registry.extract(b"data", "noextension").await {
            Err(ProcessError::UnsupportedFormat(ext)) => assert_eq!(ext, ""),
            other => panic!("Expected UnsupportedFormat error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejects_oversized_document() {
        let registry = ExtractorRegistry::new(4);
        match registry.extract(b"12345", "a.txt").await {
            Err(ProcessError::DocumentTooLarge { size, limit, .. }) => {
                assert_eq!(size, 5);
                assert_eq!(limit, 4);
            }
            other => panic!("Expected DocumentTooLarge error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejects_empty_document() {
        let registry = ExtractorRegistry::default();
        assert!(matches!(
            registry.extract(b"", "a.pdf").await,
            Err(ProcessError::EmptyDocument(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_pdf_is_an_error() {
        let registry = ExtractorRegistry::default();
        assert!(matches!(
            registry.extract(b"not a pdf at all", "broken.pdf").await,
            Err(ProcessError::PdfProcessing(_))
        ));
    }
}
