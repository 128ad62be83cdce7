//! Deterministic document analysis.
//!
//! Every step is a pure function over normalized text. Per-type behavior
//! lives in the static tables in [`rules`].

pub mod auditor;
pub mod classifier;
pub mod extractor;
pub mod normalize;
pub mod recommendations;
pub mod rules;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auditor::audit_missing_fields;
pub use classifier::{classify, Classification, NO_SIGNAL_CONFIDENCE};
pub use extractor::extract_fields;
pub use normalize::normalize;
pub use recommendations::generate_recommendations;

/// Coarse document category assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Invoice,
    Contract,
    Report,
    Other,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Invoice,
        DocumentType::Contract,
        DocumentType::Report,
        DocumentType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Invoice => "invoice",
            DocumentType::Contract => "contract",
            DocumentType::Report => "report",
            DocumentType::Other => "other",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown document type: {0}")]
pub struct UnknownDocumentType(pub String);

impl FromStr for DocumentType {
    type Err = UnknownDocumentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DocumentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownDocumentType(s.to_string()))
    }
}

/// Outcome of analyzing one document. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub filename: String,
    /// Normalized text the analysis ran against.
    pub content: String,
    pub document_type: DocumentType,
    pub confidence: f64,
    /// Expected fields not found, in table declaration order.
    pub missing_fields: Vec<String>,
    pub extracted_fields: BTreeMap<String, String>,
    /// One entry per missing field, same order.
    pub recommendations: Vec<String>,
}

/// Runs the full pure pipeline over raw text.
///
/// Order: normalize, classify, audit, extract, recommend.
pub fn analyze_text(raw_text: &str, filename: &str) -> AnalysisResult {
    let content = {
        let _step = tracing::info_span!("normalize").entered();
        normalize(raw_text)
    };

    let classification = {
        let _step = tracing::info_span!("classify").entered();
        classify(&content)
    };

    let missing_fields = {
        let _step = tracing::info_span!("audit").entered();
        audit_missing_fields(&content, classification.document_type)
    };

    let extracted_fields = {
        let _step = tracing::info_span!("extract").entered();
        extract_fields(&content, classification.document_type)
    };

    let recommendations = {
        let _step = tracing::info_span!("recommend").entered();
        generate_recommendations(&missing_fields)
    };

    AnalysisResult {
        filename: filename.to_string(),
        content,
        document_type: classification.document_type,
        confidence: classification.confidence,
        missing_fields,
        extracted_fields,
        recommendations,
    }
}
