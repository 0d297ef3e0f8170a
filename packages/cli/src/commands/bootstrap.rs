//! Default command: the guided credential bootstrap
//!
//! Linear, one-shot sequence: print the manual capture instructions,
//! activate the configured conda environment, hand the terminal to
//! `python <auth_script> login`, then report and pause. No retries and
//! no corrective action; whatever the script printed is the user's
//! error report.

use std::path::Path;

use anyhow::Result;
use console::{Term, style};
use pixiv_token_bootstrap_core::{
    BootstrapError, Config, CondaEnvironment, TokenFileStatus, inspect_token_file, locate_conda,
    spawn_and_wait,
};
use tracing::debug;

use crate::instructions::print_instructions;
use crate::output::{show_bootstrap_error, status_style};
use crate::pause::{should_pause, wait_for_acknowledgment};

/// Run the bootstrap sequence and return the process exit code
pub fn cmd_bootstrap(config: &Config, quiet: bool, verbose: u8, no_pause: bool) -> Result<i32> {
    if !quiet {
        print_instructions(config);
    }

    // Activation failures stop everything before delegation
    let conda = match locate_conda() {
        Ok(path) => path,
        Err(e) => return Ok(fail_before_delegation(e.into(), config)),
    };

    let env = match CondaEnvironment::activate(conda, &config.conda_env) {
        Ok(env) => env,
        Err(e) => return Ok(fail_before_delegation(e.into(), config)),
    };

    if verbose > 0 {
        eprintln!(
            "{} Using conda environment: {}",
            style("[info]").cyan(),
            style(env.name()).cyan()
        );
    }

    if !quiet {
        println!(
            "{} Launching {} in environment {}...",
            style("Note:").cyan(),
            style(&config.auth_script).green(),
            style(env.name()).green()
        );
        println!();
    }

    let command = env.command("python", [config.auth_script.as_str(), "login"]);
    let outcome = match spawn_and_wait(command) {
        Ok(outcome) => outcome,
        Err(e) => return Ok(fail_before_delegation(e.into(), config)),
    };
    debug!(code = outcome.exit_code(), "auth script finished");

    if !quiet {
        report_token_file(config, outcome.success());
    }

    if should_pause(no_pause, config.pause_on_exit, Term::stdout().is_term()) {
        wait_for_acknowledgment();
    }

    Ok(outcome.exit_code())
}

/// Report a wrapper failure and map it to the process exit code
///
/// Every arm that stops the bootstrap before the auth routine ran goes
/// through here, so the sentinel-vs-delegated distinction lives in one
/// place: [`BootstrapError::exit_code`].
fn fail_before_delegation(err: BootstrapError, config: &Config) -> i32 {
    show_bootstrap_error(&err, &config.conda_env);
    err.exit_code()
}

/// Advisory post-run check on the key file
///
/// The auth script owns the file's contract; a missing or empty file
/// after a "successful" run is worth a warning but never changes the
/// propagated exit code.
fn report_token_file(config: &Config, delegate_succeeded: bool) {
    let status = match inspect_token_file(Path::new(&config.auth_key_file)) {
        Ok(status) => status,
        Err(e) => {
            eprintln!(
                "{} Could not inspect {}: {e}",
                style("Warning:").yellow().bold(),
                config.auth_key_file
            );
            return;
        }
    };

    println!();
    match status {
        TokenFileStatus::Present { bytes } => {
            println!(
                "{} Token file {} is {} ({bytes} bytes).",
                style("Success:").green().bold(),
                config.auth_key_file,
                status_style(&status)
            );
        }
        TokenFileStatus::Empty | TokenFileStatus::Missing => {
            eprintln!(
                "{} Token file {} is {}.",
                style("Warning:").yellow().bold(),
                config.auth_key_file,
                status_style(&status)
            );
            if delegate_succeeded {
                eprintln!(
                    "  {} The auth script may save it elsewhere; check its output above.",
                    style("Tip:").cyan()
                );
            } else {
                eprintln!(
                    "  {} The auth script did not finish cleanly; run this tool again.",
                    style("Tip:").cyan()
                );
            }
        }
    }
}
