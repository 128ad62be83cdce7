mod cli;
mod commands;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use docaudit::{load_config, Analyzer, Config};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    if let Err(err) = run(cli).await {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(database) = &cli.database {
        config.database_path = Some(database.display().to_string());
    }

    let analyzer = Analyzer::from_config(&config).context("failed to open analysis store")?;

    match cli.command {
        Commands::Analyze(args) => commands::analyze::run(&analyzer, args, cli.json).await,
        Commands::History(args) => commands::history::run(&analyzer, args, cli.json).await,
        Commands::Show(args) => commands::show::run(&analyzer, args, cli.json).await,
        Commands::Delete(args) => commands::delete::run(&analyzer, args).await,
    }
}

fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
