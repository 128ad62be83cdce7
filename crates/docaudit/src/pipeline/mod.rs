pub mod error;
pub mod runner;

pub use error::AnalysisError;
pub use runner::Analyzer;
