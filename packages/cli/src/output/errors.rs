//! Centralized activation and delegation error formatting
//!
//! Consistent, actionable error messages for the failures that stop
//! the bootstrap before the auth script could run.

use console::style;
use pixiv_token_bootstrap_core::{BootstrapError, DelegateError, EnvError};

/// Format activation errors with actionable guidance
///
/// Returns a styled, multi-line error message with troubleshooting steps.
pub fn format_env_error(e: &EnvError, env_name: &str) -> String {
    match e {
        EnvError::CondaNotFound => {
            format!(
                "{}\n\n  {}\n  {}\n  {}\n  {}",
                style("conda executable not found").red().bold(),
                "Install miniconda or anaconda, or point this tool at an existing install:",
                style("  https://docs.conda.io/en/latest/miniconda.html").cyan(),
                style("  export PIXIV_CONDA_EXE=/path/to/conda").cyan(),
                "Then run this tool again."
            )
        }
        EnvError::EnvNotFound { name } => {
            format!(
                "{}\n\n  {}\n  {}\n  {}",
                style(format!("conda environment '{name}' not found"))
                    .red()
                    .bold(),
                "Create it and install the auth script's dependencies:",
                style(format!("  conda create -n {name} python")).cyan(),
                style(format!("  conda run -n {name} pip install pixivpy3")).cyan()
            )
        }
        EnvError::ListFailed(msg) => {
            format!(
                "{}\n\n  {}\n\n  {}",
                style("could not list conda environments").red().bold(),
                msg,
                style(format!("  Check: conda env list (expecting '{env_name}')")).cyan()
            )
        }
        EnvError::Io(err) => {
            format!(
                "{}\n\n  {err}",
                style("failed to run conda").red().bold()
            )
        }
    }
}

/// Show any wrapper failure that stopped the bootstrap, to stderr
pub fn show_bootstrap_error(e: &BootstrapError, env_name: &str) {
    match e {
        BootstrapError::Env(err) => show_env_error(err, env_name),
        BootstrapError::Delegate(err) => show_delegate_error(err),
    }
}

/// Show an activation error in a rich format to stderr
pub fn show_env_error(e: &EnvError, env_name: &str) {
    eprintln!();
    eprintln!("{}", format_env_error(e, env_name));
}

/// Show a delegation spawn failure to stderr
///
/// This is the "failed to even start" case; a nonzero exit from the
/// script itself is reported by the script and propagated silently.
pub fn show_delegate_error(e: &DelegateError) {
    let DelegateError::SpawnFailed { command, source } = e;
    eprintln!();
    eprintln!(
        "{}\n\n  Command: {command}\n  Cause:   {source}",
        style("failed to start the authentication script")
            .red()
            .bold()
    );
}
