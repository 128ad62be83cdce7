use crate::error::ProcessError;
use crate::processor::{DocumentFormat, DocumentProcessor};

/// Extracts the embedded text layer of a PDF with lopdf. No OCR: image-only
/// pages yield no text.
pub struct PdfProcessor;

impl PdfProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentProcessor for PdfProcessor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ProcessError> {
        let _span = tracing::info_span!("processor.pdf", size = bytes.len()).entered();

        let doc = lopdf::Document::load_mem(bytes)
            .map_err(|e| ProcessError::PdfProcessing(format!("Failed to load PDF: {}", e)))?;

        extract_text_from_pdf(&doc)
    }

    fn supports(&self, format: DocumentFormat) -> bool {
        matches!(format, DocumentFormat::Pdf)
    }
}

fn extract_text_from_pdf(doc: &lopdf::Document) -> Result<String, ProcessError> {
    let pages = doc.get_pages();
    if pages.is_empty() {
        return Err(ProcessError::PdfProcessing("PDF has no pages".to_string()));
    }

    let mut text = String::new();
    let mut failed_pages = 0usize;

    for page_num in pages.keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(e) => {
                failed_pages += 1;
                tracing::warn!(page = page_num, error = %e, "could not extract page text");
            }
        }
    }

    if failed_pages == pages.len() {
        return Err(ProcessError::TextExtraction(format!(
            "no readable text on any of {} pages",
            pages.len()
        )));
    }

    tracing::debug!(pages = pages.len(), chars = text.len(), "extracted PDF text");
    Ok(text)
}
