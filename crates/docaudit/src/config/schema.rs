use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::db::analysis_repo::DEFAULT_HISTORY_LIMIT;
use crate::error::ConfigError;
use crate::processor::DEFAULT_MAX_DOCUMENT_BYTES;

pub const CONFIG_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    /// SQLite file holding stored analyses. Defaults to
    /// `~/.docaudit/data/docaudit.db`.
    #[serde(default)]
    pub database_path: Option<String>,
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: usize,
    #[serde(default = "default_history_page_size")]
    pub history_page_size: u64,
}

fn default_max_document_bytes() -> usize {
    DEFAULT_MAX_DOCUMENT_BYTES
}

fn default_history_page_size() -> u64 {
    DEFAULT_HISTORY_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            database_path: None,
            max_document_bytes: default_max_document_bytes(),
            history_page_size: default_history_page_size(),
        }
    }
}

impl Config {
    pub fn resolved_database_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.database_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => crate::db::default_database_path().ok_or_else(|| ConfigError::Validation {
                message: "No database_path configured and no home directory found".to_string(),
            }),
        }
    }
}
