use anyhow::Result;
use chrono::SecondsFormat;
use docaudit::StoredAnalysis;

pub fn print_record(stored: &StoredAnalysis, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stored)?);
    } else {
        print!("{}", summary(stored));
    }
    Ok(())
}

/// Human-readable block for one stored analysis.
pub fn summary(stored: &StoredAnalysis) -> String {
    let a = &stored.analysis;
    let mut out = format!(
        "{}  {}\n  type:       {} ({:.2})\n  created_at: {}\n",
        stored.id,
        a.filename,
        a.document_type,
        a.confidence,
        stored.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    );

    if a.missing_fields.is_empty() {
        out.push_str("  missing:    none\n");
    } else {
        out.push_str(&format!("  missing:    {}\n", a.missing_fields.join(", ")));
    }

    for (name, value) in &a.extracted_fields {
        out.push_str(&format!("  {}: {}\n", name, value));
    }
    for rec in &a.recommendations {
        out.push_str(&format!("  - {}\n", rec));
    }
    out
}

pub fn history_line(stored: &StoredAnalysis) -> String {
    format!(
        "{}  {:<8}  {:.2}  {}  {}",
        stored.id,
        stored.analysis.document_type,
        stored.analysis.confidence,
        stored.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        stored.analysis.filename,
    )
}
