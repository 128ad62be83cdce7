//! Database error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQLite error from rusqlite.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error when creating directories or files.
    #[error("IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A migration failed to apply.
    #[error("Migration failed at version {version}: {reason}")]
    Migration { version: u32, reason: String },

    /// The database lock was poisoned.
    #[error("Database lock poisoned")]
    LockPoisoned,

    /// A JSON column could not be encoded or decoded.
    #[error("Failed to (de)serialize column '{column}': {source}")]
    Serialization {
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A stored value is outside the accepted domain.
    #[error("Corrupt value in column '{column}': {value}")]
    CorruptValue { column: &'static str, value: String },

    /// The blocking database task panicked or was cancelled.
    #[error("Database task failed: {0}")]
    TaskJoin(String),
}
