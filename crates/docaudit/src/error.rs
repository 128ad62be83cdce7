use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocauditError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Processing error: {0}")]
    Process(#[from] ProcessError),

    #[error("Database error: {0}")]
    Database(#[from] crate::db::DatabaseError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] crate::pipeline::AnalysisError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },

    #[error("Schema validation failed: {errors}")]
    SchemaValidation { errors: String },
}

/// Failures of the text-extraction collaborator.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Document '{filename}' is {size} bytes, limit is {limit}")]
    DocumentTooLarge {
        filename: String,
        size: usize,
        limit: usize,
    },

    #[error("Document '{0}' is empty")]
    EmptyDocument(String),

    #[error("Failed to process PDF: {0}")]
    PdfProcessing(String),

    #[error("Text extraction failed: {0}")]
    TextExtraction(String),
}

pub type Result<T> = std::result::Result<T, DocauditError>;
