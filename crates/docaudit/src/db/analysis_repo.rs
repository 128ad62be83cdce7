//! Analysis repository: row-level operations on the `analyses` table.

use rusqlite::{params, Row};

use super::{Database, DatabaseError};
use crate::analysis::DocumentType;

/// Default page size for history queries.
pub const DEFAULT_HISTORY_LIMIT: u64 = 50;

/// A raw analysis row. List and map columns hold JSON text.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRow {
    pub id: String,
    pub filename: String,
    pub content: String,
    pub document_type: String,
    pub confidence: f64,
    pub missing_fields: String,
    pub recommendations: String,
    pub extracted_fields: String,
    pub created_at: String,
}

impl AnalysisRow {
    fn from_row(row: &Row<'_>) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            id: row.get("id")?,
            filename: row.get("filename")?,
            content: row.get("content")?,
            document_type: row.get("document_type")?,
            confidence: row.get("confidence")?,
            missing_fields: row.get("missing_fields")?,
            recommendations: row.get("recommendations")?,
            extracted_fields: row.get("extracted_fields")?,
            created_at: row.get("created_at")?,
        })
    }
}

/// Query filter parameters for history listing.
#[derive(Debug, Default, Clone)]
pub struct HistoryFilter {
    pub document_type: Option<DocumentType>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Inserts a new analysis row.
pub fn insert(db: &Database, row: &AnalysisRow) -> Result<(), DatabaseError> {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO analyses (id, filename, content, document_type, confidence,
             missing_fields, recommendations, extracted_fields, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                row.id,
                row.filename,
                row.content,
                row.document_type,
                row.confidence,
                row.missing_fields,
                row.recommendations,
                row.extracted_fields,
                row.created_at,
            ],
        )?;
        Ok(())
    })
}

/// Finds an analysis by its ID.
pub fn find_by_id(db: &Database, id: &str) -> Result<Option<AnalysisRow>, DatabaseError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare("SELECT * FROM analyses WHERE id = ?1")?;
        let mut rows = stmt.query_map(params![id], AnalysisRow::from_row)?;
        match rows.next() {
            Some(Ok(row)) => Ok(Some(row)),
            Some(Err(e)) => Err(DatabaseError::Sqlite(e)),
            None => Ok(None),
        }
    })
}

/// Lists analyses newest first, returning (rows, total_count).
pub fn query(
    db: &Database,
    filter: &HistoryFilter,
) -> Result<(Vec<AnalysisRow>, u64), DatabaseError> {
    db.with_conn(|conn| {
        let type_name = filter.document_type.map(|t| t.as_str());
        let where_clause = if type_name.is_some() {
            "WHERE document_type = ?1"
        } else {
            ""
        };

        let count_sql = format!("SELECT COUNT(*) FROM analyses {}", where_clause);
        let total: u64 = match type_name {
            Some(t) => conn.query_row(&count_sql, params![t], |r| r.get(0))?,
            None => conn.query_row(&count_sql, [], |r| r.get(0))?,
        };

        let limit = sql_int(filter.limit.unwrap_or(DEFAULT_HISTORY_LIMIT));
        let offset = sql_int(filter.offset.unwrap_or(0));

        let rows = match type_name {
            Some(t) => {
                let mut stmt = conn.prepare(
                    "SELECT * FROM analyses WHERE document_type = ?1
                     ORDER BY created_at DESC, rowid DESC LIMIT ?2 OFFSET ?3",
                )?;
                let rows = stmt
                    .query_map(params![t, limit, offset], AnalysisRow::from_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT * FROM analyses
                     ORDER BY created_at DESC, rowid DESC LIMIT ?1 OFFSET ?2",
                )?;
                let rows = stmt
                    .query_map(params![limit, offset], AnalysisRow::from_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
        };

        Ok((rows, total))
    })
}

/// SQLite integers are signed; values past `i64::MAX` saturate instead of
/// wrapping negative (a negative LIMIT means unbounded).
fn sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Deletes an analysis. Returns whether a row was actually removed.
pub fn delete(db: &Database, id: &str) -> Result<bool, DatabaseError> {
    db.with_conn(|conn| {
        let affected = conn.execute("DELETE FROM analyses WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    })
}
