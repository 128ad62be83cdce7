use anyhow::{Context, Result};
use docaudit::Analyzer;

use crate::cli::IdArgs;
use crate::output;

pub async fn run(analyzer: &Analyzer, args: IdArgs, json: bool) -> Result<()> {
    let stored = analyzer
        .get(&args.id)
        .await
        .with_context(|| format!("failed to load analysis {}", args.id))?;

    output::print_record(&stored, json)
}
