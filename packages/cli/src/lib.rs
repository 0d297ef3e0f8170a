//! pixiv-token-bootstrap CLI
//!
//! Guides a human through the manual pixiv OAuth code capture, then
//! delegates the actual token exchange to the external auth script
//! inside a named conda environment. This module contains the shared
//! CLI implementation used by all binaries.

mod commands;
mod instructions;
mod output;
mod pause;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use pixiv_token_bootstrap_core::config::{
    display_validation_error, display_validation_warning, validate_config,
};
use pixiv_token_bootstrap_core::{config, load_config_or_default};

/// Obtain a pixiv OAuth refresh token via the external auth script
#[derive(Parser)]
#[command(name = "pixiv-token-bootstrap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Obtain a pixiv OAuth refresh token via the external auth script", long_about = None)]
#[command(after_help = get_banner())]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Skip the final key-press pause
    #[arg(long, global = true)]
    no_pause: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the refresh-token key file
    Check(commands::CheckArgs),
    /// Manage configuration
    Config(commands::ConfigArgs),
}

/// Get the ASCII banner for help display
fn get_banner() -> &'static str {
    r#"
        _  _
  _ __ (_)_  _(_)_ __
 | '_ \| \ \/ / \ \ /
 | .__/|_/_/\_\_|_\_\
 |_|     token bootstrap
"#
}

/// Binary entry point shared by `pixiv-token-bootstrap` and `ptb`
pub fn main_entry() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{} {err:#}", style("Error:").red().bold());
            std::process::exit(1);
        }
    }
}

/// Parse arguments, load config, and dispatch
///
/// Returns the process exit code: the delegated script's code when it
/// ran, the activation sentinel when it could not, 1 for config errors.
pub fn run() -> Result<i32> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let config = match load_config_or_default() {
        Ok(config) => {
            if cli.verbose > 0
                && let Some(path) = config::paths::get_config_path()
            {
                eprintln!(
                    "{} Config: {}",
                    style("[info]").cyan(),
                    path.display()
                );
            }
            config
        }
        Err(e) => {
            // Display rich error for invalid config
            eprintln!("{} Configuration error", style("Error:").red().bold());
            eprintln!();
            eprintln!("  {e}");
            eprintln!();
            if let Some(path) = config::paths::get_config_path() {
                eprintln!("  Config file: {}", style(path.display()).yellow());
                eprintln!();
            }
            eprintln!(
                "  {} Check the config file for syntax errors or unknown fields.",
                style("Tip:").cyan()
            );
            eprintln!(
                "  {} Run {} to restore defaults.",
                style("Tip:").cyan(),
                style("ptb config reset").green()
            );
            return Ok(1);
        }
    };

    match validate_config(&config) {
        Ok(warnings) => {
            if !cli.quiet {
                for warning in &warnings {
                    display_validation_warning(warning);
                }
            }
        }
        Err(err) => {
            display_validation_error(&err);
            return Ok(1);
        }
    }

    match cli.command {
        Some(Commands::Check(args)) => commands::cmd_check(&args, &config, cli.quiet),
        Some(Commands::Config(args)) => commands::cmd_config(&args, &config, cli.quiet),
        None => commands::cmd_bootstrap(&config, cli.quiet, cli.verbose, cli.no_pause),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_with_no_arguments() {
        let cli = Cli::try_parse_from(["ptb"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
        assert!(!cli.no_pause);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parses_global_flags() {
        let cli = Cli::try_parse_from(["ptb", "-vv", "--no-color", "--no-pause"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(cli.no_pause);
    }

    #[test]
    fn cli_parses_check_subcommand() {
        let cli = Cli::try_parse_from(["ptb", "check"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Check(_))));
    }

    #[test]
    fn cli_rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["ptb", "--frobnicate"]).is_err());
    }
}
