use thiserror::Error;

/// Request-level failures surfaced to callers of [`super::Analyzer`].
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Text extraction failed: {0}")]
    Extraction(#[from] crate::error::ProcessError),

    #[error("Persistence failed: {0}")]
    Persistence(#[from] crate::db::DatabaseError),

    #[error("Analysis '{id}' not found")]
    NotFound { id: String },
}

impl AnalysisError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AnalysisError::NotFound { .. })
    }
}
