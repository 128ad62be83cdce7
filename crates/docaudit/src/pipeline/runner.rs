use std::path::Path;
use std::sync::Arc;

use tracing::{info_span, Instrument};

use crate::analysis::analyze_text;
use crate::config::Config;
use crate::db::{
    AnalysisStore, Database, HistoryFilter, SqliteAnalysisStore, StoredAnalysis,
};
use crate::error::DocauditError;
use crate::processor::{ExtractorRegistry, TextExtractor};

use super::error::AnalysisError;

/// Analysis orchestrator: runs the pure pipeline and hands each result to
/// the store. Holds no per-request state, so one instance serves any
/// number of concurrent requests.
#[derive(Clone)]
pub struct Analyzer {
    extractor: Arc<dyn TextExtractor>,
    store: Arc<dyn AnalysisStore>,
    history_page_size: u64,
}

impl Analyzer {
    pub fn new(extractor: Arc<dyn TextExtractor>, store: Arc<dyn AnalysisStore>) -> Self {
        Self {
            extractor,
            store,
            history_page_size: crate::db::analysis_repo::DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Production constructor: opens the configured database and wires the
    /// extension-routed extractor.
    pub fn from_config(config: &Config) -> Result<Self, DocauditError> {
        let db_path = config.resolved_database_path()?;
        let db = Database::open(&db_path)?;

        Ok(Self {
            extractor: Arc::new(ExtractorRegistry::new(config.max_document_bytes)),
            store: Arc::new(SqliteAnalysisStore::new(db)),
            history_page_size: config.history_page_size,
        })
    }

    /// Analyzes already-extracted text and stores the result.
    pub async fn analyze(
        &self,
        text: &str,
        filename: &str,
    ) -> Result<StoredAnalysis, AnalysisError> {
        let span = info_span!("analysis", filename = %display_name(filename));

        async {
            let analysis = analyze_text(text, filename);
            tracing::info!(
                document_type = %analysis.document_type,
                confidence = analysis.confidence,
                missing = analysis.missing_fields.len(),
                extracted = analysis.extracted_fields.len(),
                "analyzed document"
            );

            let stored = self
                .store
                .save(&analysis)
                .instrument(info_span!("store"))
                .await?;
            Ok::<_, AnalysisError>(stored)
        }
        .instrument(span)
        .await
    }

    /// Extracts text from raw document bytes, then analyzes it. Extraction
    /// failures abort before anything is stored.
    pub async fn analyze_document(
        &self,
        bytes: &[u8],
        filename: &str,
    ) -> Result<StoredAnalysis, AnalysisError> {
        let text = self
            .extractor
            .extract(bytes, filename)
            .instrument(info_span!("extract_text", filename = %display_name(filename)))
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "text extraction failed"))?;

        self.analyze(&text, filename).await
    }

    /// Lists stored analyses newest first. A missing limit falls back to the
    /// configured page size.
    pub async fn history(
        &self,
        filter: &HistoryFilter,
    ) -> Result<(Vec<StoredAnalysis>, u64), AnalysisError> {
        let mut filter = filter.clone();
        filter.limit.get_or_insert(self.history_page_size);
        Ok(self.store.list(&filter).await?)
    }

    pub async fn get(&self, id: &str) -> Result<StoredAnalysis, AnalysisError> {
        self.store
            .find(id)
            .await?
            .ok_or_else(|| AnalysisError::NotFound { id: id.to_string() })
    }

    pub async fn delete(&self, id: &str) -> Result<(), AnalysisError> {
        if self.store.delete(id).await? {
            tracing::info!(id, "deleted analysis");
            Ok(())
        } else {
            Err(AnalysisError::NotFound { id: id.to_string() })
        }
    }
}

/// Final path component only; keeps directories out of span fields.
fn display_name(filename: &str) -> &str {
    Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}
