use anyhow::{Context, Result};
use docaudit::Analyzer;

use crate::cli::IdArgs;

pub async fn run(analyzer: &Analyzer, args: IdArgs) -> Result<()> {
    analyzer
        .delete(&args.id)
        .await
        .with_context(|| format!("failed to delete analysis {}", args.id))?;

    println!("deleted {}", args.id);
    Ok(())
}
