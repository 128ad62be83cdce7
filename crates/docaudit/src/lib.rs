pub mod analysis;
pub mod config;
pub mod db;
pub mod error;
pub mod pipeline;
pub mod processor;

pub use analysis::{
    analyze_text, audit_missing_fields, classify, extract_fields, generate_recommendations,
    normalize, AnalysisResult, Classification, DocumentType, NO_SIGNAL_CONFIDENCE,
};
pub use config::{load_config, Config};
pub use db::{
    AnalysisStore, Database, DatabaseError, HistoryFilter, SqliteAnalysisStore, StoredAnalysis,
};
pub use error::{ConfigError, DocauditError, ProcessError, Result};
pub use pipeline::{AnalysisError, Analyzer};
pub use processor::{ExtractorRegistry, TextExtractor};
