use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod cli;
mod config;
mod core;
mod error;
mod signal;
mod utils;

use config::Config;
use error::{LrcFetchError, Result};

#[derive(Parser)]
#[command(name = "lrcfetch")]
#[command(about = "Thin command-line client for LRCLIB synced/plain lyrics lookup")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file path (optional)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up lyrics for a single track
    Get(cli::get::GetArgs),

    /// Show configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        // Not-found and cancellation already reported by the command
        Err(LrcFetchError::NotFound) | Err(LrcFetchError::Cancelled) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    utils::logging::init_logging(cli.verbose)?;

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Get(args) => cli::get::execute(args, &config).await,
        Commands::Config(args) => cli::config::execute(args, &config).await,
    }
}
