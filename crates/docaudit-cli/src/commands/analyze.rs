use std::path::Path;

use anyhow::{Context, Result};
use docaudit::Analyzer;
use tracing::info;

use crate::cli::AnalyzeArgs;
use crate::output;

pub async fn run(analyzer: &Analyzer, args: AnalyzeArgs, json: bool) -> Result<()> {
    for path in &args.files {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        let filename = stored_filename(path);

        let stored = analyzer
            .analyze_document(&bytes, &filename)
            .await
            .with_context(|| format!("failed to analyze {}", path.display()))?;

        info!(id = %stored.id, "stored analysis");
        output::print_record(&stored, json)?;
    }

    Ok(())
}

/// Name recorded with the analysis: the file name without its directory.
fn stored_filename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
