use anyhow::{Context, Result};
use docaudit::{Analyzer, HistoryFilter};

use crate::cli::HistoryArgs;
use crate::output;

pub async fn run(analyzer: &Analyzer, args: HistoryArgs, json: bool) -> Result<()> {
    let filter = HistoryFilter {
        document_type: args.document_type,
        limit: args.limit,
        offset: args.offset,
    };

    let (records, total) = analyzer
        .history(&filter)
        .await
        .context("failed to list analyses")?;

    if json {
        let page = serde_json::json!({ "total": total, "items": records });
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    for record in &records {
        println!("{}", output::history_line(record));
    }
    println!("{} of {} analyses", records.len(), total);
    Ok(())
}
