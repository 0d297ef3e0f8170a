//! Config command implementation
//!
//! `config show` prints the active configuration; `config reset`
//! rewrites the config file with defaults.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;
use dialoguer::Confirm;
use pixiv_token_bootstrap_core::{Config, config, save_config};

/// Arguments for the config command
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the active configuration as JSON
    Show,
    /// Write a default configuration file
    Reset {
        /// Overwrite without confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

/// Run the config command
pub fn cmd_config(args: &ConfigArgs, current: &Config, quiet: bool) -> Result<i32> {
    match args.command {
        ConfigCommands::Show => {
            let json = serde_json::to_string_pretty(current)
                .context("failed to serialize configuration")?;
            println!("{json}");
            if !quiet
                && let Some(path) = config::paths::get_config_path()
            {
                eprintln!();
                eprintln!("{} {}", style("Config file:").dim(), path.display());
            }
            Ok(0)
        }
        ConfigCommands::Reset { yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Overwrite the config file with defaults?")
                    .default(false)
                    .interact()
                    .unwrap_or(false);
                if !confirmed {
                    if !quiet {
                        println!("{}", style("Reset cancelled").yellow());
                    }
                    return Ok(0);
                }
            }

            save_config(&Config::default()).context("failed to write configuration")?;
            if !quiet {
                println!(
                    "{} Configuration reset to defaults.",
                    style("Success:").green().bold()
                );
            }
            Ok(0)
        }
    }
}
