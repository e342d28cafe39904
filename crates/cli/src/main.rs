use anyhow::Result;
use call_ledger_core::ENV_DATABASE_URL;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "call-ledger")]
#[command(about = "Schema manager for the call-logging database", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the idempotent schema migrations (safe to re-run)
    Migrate,
    /// Report which tables, columns, and policies are present
    Status,
}

fn database_url() -> Result<String> {
    std::env::var(ENV_DATABASE_URL)
        .map_err(|_| anyhow::anyhow!("{ENV_DATABASE_URL} environment variable must be set"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Migrate => commands::migrate::run().await,
        Commands::Status => commands::status::run().await,
    }
}
