//! # Crewdesk CLI
//!
//! Command-line interface for the Crewdesk staffing and projects server.
//!
//! ## Usage
//!
//! ```bash
//! crewdesk serve    # Start the API server (runs migrations automatically)
//! crewdesk migrate  # Run database migrations
//! crewdesk --help   # Show help
//! ```

use clap::{Args, Parser, Subcommand};
use error::Result;

mod commands;
mod config;

/// Crewdesk - staffing and projects management server
#[derive(Parser, Debug)]
#[command(name = "crewdesk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (debug, info, warn, error)
    #[arg(short = 'L', long, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    /// Output format (json, pretty, compact)
    #[arg(short, long, env = "CREWDESK_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the API server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Server host to bind to
    #[arg(long, env = "CREWDESK_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port to bind to
    #[arg(short, long, env = "CREWDESK_PORT", default_value = "8000")]
    pub port: u16,
}

#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Show pending migrations without applying them
    #[arg(long)]
    pub dry_run: bool,

    /// Rollback the last applied migration
    #[arg(long)]
    pub rollback: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level, &cli.log_format, None)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    logging::info!(target: "app", command = ?cli.command, "Crewdesk CLI starting...");

    let db_config = config::DatabaseConfig::from_env().map_err(|e| error::AppError::config(e.to_string()))?;

    match cli.command {
        Commands::Serve(args) => commands::serve::serve(&db_config, args).await,
        Commands::Migrate(args) => commands::migrate::migrate(&db_config, args).await,
    }
}
