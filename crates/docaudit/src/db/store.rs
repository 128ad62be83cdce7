//! Persistence collaborator for analysis results.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::analysis_repo::{self, AnalysisRow, HistoryFilter};
use super::{Database, DatabaseError};
use crate::analysis::{AnalysisResult, DocumentType};

/// An analysis result together with its server-assigned identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAnalysis {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
}

#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Stores a result, assigning it an id and timestamp.
    async fn save(&self, analysis: &AnalysisResult) -> Result<StoredAnalysis, DatabaseError>;

    async fn find(&self, id: &str) -> Result<Option<StoredAnalysis>, DatabaseError>;

    /// Lists stored analyses newest first, with the unpaginated total.
    async fn list(
        &self,
        filter: &HistoryFilter,
    ) -> Result<(Vec<StoredAnalysis>, u64), DatabaseError>;

    /// Returns `true` if a record was removed.
    async fn delete(&self, id: &str) -> Result<bool, DatabaseError>;
}

/// [`AnalysisStore`] backed by the SQLite `analyses` table.
#[derive(Clone)]
pub struct SqliteAnalysisStore {
    db: Database,
}

impl SqliteAnalysisStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Runs a blocking repository call on the blocking thread pool.
    async fn blocking<F, T>(&self, f: F) -> Result<T, DatabaseError>
    where
        F: FnOnce(&Database) -> Result<T, DatabaseError> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || f(&db))
            .await
            .map_err(|e| DatabaseError::TaskJoin(e.to_string()))?
    }
}

#[async_trait]
impl AnalysisStore for SqliteAnalysisStore {
    async fn save(&self, analysis: &AnalysisResult) -> Result<StoredAnalysis, DatabaseError> {
        let stored = StoredAnalysis {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            analysis: analysis.clone(),
        };
        let row = to_row(&stored)?;

        self.blocking(move |db| analysis_repo::insert(db, &row))
            .await?;

        tracing::info!(id = %stored.id, document_type = %stored.analysis.document_type, "stored analysis");
        Ok(stored)
    }

    async fn find(&self, id: &str) -> Result<Option<StoredAnalysis>, DatabaseError> {
        let id = id.to_string();
        let row = self
            .blocking(move |db| analysis_repo::find_by_id(db, &id))
            .await?;
        row.map(from_row).transpose()
    }

    async fn list(
        &self,
        filter: &HistoryFilter,
    ) -> Result<(Vec<StoredAnalysis>, u64), DatabaseError> {
        let filter = filter.clone();
        let (rows, total) = self
            .blocking(move |db| analysis_repo::query(db, &filter))
            .await?;
        let analyses = rows
            .into_iter()
            .map(from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((analyses, total))
    }

    async fn delete(&self, id: &str) -> Result<bool, DatabaseError> {
        let id = id.to_string();
        self.blocking(move |db| analysis_repo::delete(db, &id)).await
    }
}

fn to_json<T: Serialize>(column: &'static str, value: &T) -> Result<String, DatabaseError> {
    serde_json::to_string(value).map_err(|source| DatabaseError::Serialization { column, source })
}

fn from_json<T: serde::de::DeserializeOwned>(
    column: &'static str,
    value: &str,
) -> Result<T, DatabaseError> {
    serde_json::from_str(value).map_err(|source| DatabaseError::Serialization { column, source })
}

fn to_row(stored: &StoredAnalysis) -> Result<AnalysisRow, DatabaseError> {
    let analysis = &stored.analysis;
    Ok(AnalysisRow {
        id: stored.id.clone(),
        filename: analysis.filename.clone(),
        content: analysis.content.clone(),
        document_type: analysis.document_type.as_str().to_string(),
        confidence: analysis.confidence,
        missing_fields: to_json("missing_fields", &analysis.missing_fields)?,
        recommendations: to_json("recommendations", &analysis.recommendations)?,
        extracted_fields: to_json("extracted_fields", &analysis.extracted_fields)?,
        // Fixed-width UTC timestamps keep lexical order equal to time order.
        created_at: stored
            .created_at
            .to_rfc3339_opts(SecondsFormat::Micros, true),
    })
}

fn from_row(row: AnalysisRow) -> Result<StoredAnalysis, DatabaseError> {
    let document_type: DocumentType =
        row.document_type
            .parse()
            .map_err(|_| DatabaseError::CorruptValue {
                column: "document_type",
                value: row.document_type.clone(),
            })?;

    let created_at = DateTime::parse_from_rfc3339(&row.created_at)
        .map_err(|_| DatabaseError::CorruptValue {
            column: "created_at",
            value: row.created_at.clone(),
        })?
        .with_timezone(&Utc);

    Ok(StoredAnalysis {
        id: row.id,
        created_at,
        analysis: AnalysisResult {
            filename: row.filename,
            content: row.content,
            document_type,
            confidence: row.confidence,
            missing_fields: from_json("missing_fields", &row.missing_fields)?,
            extracted_fields: from_json("extracted_fields", &row.extracted_fields)?,
            recommendations: from_json("recommendations", &row.recommendations)?,
        },
    })
}
