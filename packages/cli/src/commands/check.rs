//! Check command implementation
//!
//! Inspects the refresh-token key file without running anything. Exit
//! code 0 when a token is present, 1 otherwise, so scripts can gate on
//! it before launching the downstream consumer.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;
use pixiv_token_bootstrap_core::{Config, TokenFileStatus, inspect_token_file};

use crate::output::status_style;

/// Arguments for the check command
#[derive(Args)]
pub struct CheckArgs {
    /// Key file to inspect (defaults to the configured auth_key_file)
    #[arg(long)]
    pub key_file: Option<PathBuf>,
}

/// Run the check command
pub fn cmd_check(args: &CheckArgs, config: &Config, quiet: bool) -> Result<i32> {
    let path = args
        .key_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.auth_key_file));

    let status = inspect_token_file(&path)?;

    if !quiet {
        match status {
            TokenFileStatus::Present { bytes } => {
                println!(
                    "{} {} ({bytes} bytes)",
                    path.display(),
                    status_style(&status)
                );
            }
            TokenFileStatus::Empty | TokenFileStatus::Missing => {
                println!("{} {}", path.display(), status_style(&status));
                println!(
                    "  {} Run {} to obtain a refresh token.",
                    style("Tip:").cyan(),
                    style("ptb").green()
                );
            }
        }
    }

    Ok(match status {
        TokenFileStatus::Present { .. } => 0,
        _ => 1,
    })
}
