mod report;
mod scan;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    /// Markdown document with a ranked table
    Md,
    /// Comma-separated values, one row per deal
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "dealscout")]
#[command(about = "Finds discounted all-inclusive vacation packages matching a traveler profile")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape the configured providers and print ranked matching deals
    Scan {
        /// Restrict the scan to a single configured provider (by name)
        #[arg(long)]
        provider: Option<String>,

        /// Write the ranked deals to a document at this path
        #[arg(long)]
        export: Option<PathBuf>,

        /// Export document format
        #[arg(long, value_enum, default_value = "md")]
        format: ExportFormat,

        /// List what would be scanned without fetching anything
        #[arg(long)]
        dry_run: bool,
    },
    /// List the configured providers and their listing pages
    Providers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = dealscout_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scan {
            provider,
            export,
            format,
            dry_run,
        } => scan::run_scan(&config, provider.as_deref(), dry_run, export.as_deref(), format).await,
        Commands::Providers => scan::run_providers(&config),
    }
}
