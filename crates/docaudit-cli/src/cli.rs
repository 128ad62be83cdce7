use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use docaudit::DocumentType;

#[derive(Parser, Debug)]
#[command(
    name = "docaudit",
    version,
    about = "Classify documents, audit missing fields and extract key values"
)]
pub struct Cli {
    /// JSON config file; defaults apply when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Overrides the configured database path.
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Print records as JSON instead of a summary.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true, default_value_t = false)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one or more PDF or text documents.
    Analyze(AnalyzeArgs),
    /// List stored analyses, newest first.
    History(HistoryArgs),
    /// Print one stored analysis.
    Show(IdArgs),
    /// Delete one stored analysis.
    Delete(IdArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    #[arg(long)]
    pub limit: Option<u64>,

    #[arg(long)]
    pub offset: Option<u64>,

    #[arg(long = "type")]
    pub document_type: Option<DocumentType>,
}

#[derive(Args, Debug, Clone)]
pub struct IdArgs {
    pub id: String,
}
