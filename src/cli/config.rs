use clap::{Args, Subcommand};

use crate::config::Config as AppConfig;
use crate::error::Result;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}

pub async fn execute(args: ConfigArgs, config: &AppConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            println!("Current configuration:");
            println!("  lrclib_instance: {}", config.lrclib_instance);
            println!("  request_timeout_seconds: {}", config.request_timeout_seconds);
            println!("  user_agent: {:?}", config.user_agent);

            let env_vars = AppConfig::env_overrides();
            if !env_vars.is_empty() {
                println!("\nEnvironment overrides:");
                for (key, value) in env_vars {
                    println!("  {} = {}", key, value);
                }
            }
        }

        ConfigCommands::Path => {
            println!("{}", AppConfig::default_config_path()?.display());
        }
    }

    Ok(())
}
