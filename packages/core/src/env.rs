//! Conda environment discovery and activation
//!
//! The auth script lives inside a named conda environment. Activation
//! here means proving the environment exists and building child
//! commands routed through `conda run`, so the delegated process sees
//! the environment without any shell-level `conda activate` state.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::Command;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding conda binary discovery
pub const CONDA_EXE_ENV: &str = "PIXIV_CONDA_EXE";

/// Errors from locating conda or activating an environment
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("conda executable not found")]
    CondaNotFound,

    #[error("failed to list conda environments: {0}")]
    ListFailed(String),

    #[error("conda environment '{name}' not found")]
    EnvNotFound { name: String },

    #[error("failed to run conda: {0}")]
    Io(#[from] std::io::Error),
}

/// An activated named conda environment
///
/// Constructed only through [`CondaEnvironment::activate`], so holding
/// one means the environment was present when checked.
#[derive(Debug, Clone)]
pub struct CondaEnvironment {
    conda: PathBuf,
    name: String,
}

#[derive(Deserialize)]
struct EnvList {
    envs: Vec<PathBuf>,
}

/// Locate the conda binary
///
/// Checks `PIXIV_CONDA_EXE`, then PATH, then well-known install
/// prefixes under the home directory.
pub fn locate_conda() -> Result<PathBuf, EnvError> {
    if let Ok(exe) = std::env::var(CONDA_EXE_ENV) {
        let path = PathBuf::from(exe);
        if path.is_file() {
            return Ok(path);
        }
        return Err(EnvError::CondaNotFound);
    }

    if let Ok(path) = which::which("conda") {
        return Ok(path);
    }

    for candidate in well_known_conda_paths() {
        if candidate.is_file() {
            debug!(path = %candidate.display(), "found conda outside PATH");
            return Ok(candidate);
        }
    }

    Err(EnvError::CondaNotFound)
}

fn well_known_conda_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(base) = directories::BaseDirs::new() {
        let home = base.home_dir();
        for prefix in ["miniconda3", "anaconda3", "miniforge3"] {
            paths.push(home.join(prefix).join("bin").join("conda"));
            paths.push(home.join(prefix).join("Scripts").join("conda.exe"));
        }
    }
    paths.push(PathBuf::from("/opt/conda/bin/conda"));

    paths
}

impl CondaEnvironment {
    /// Activate the named environment
    ///
    /// Runs `conda env list --json` and verifies the requested name is
    /// among the listed environment prefixes. Returns
    /// [`EnvError::EnvNotFound`] when it is not, before anything is
    /// delegated.
    pub fn activate(conda: PathBuf, name: &str) -> Result<Self, EnvError> {
        let output = Command::new(&conda)
            .args(["env", "list", "--json"])
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(EnvError::ListFailed(stderr));
        }

        let list: EnvList = serde_json::from_slice(&output.stdout)
            .map_err(|e| EnvError::ListFailed(format!("unexpected env list output: {e}")))?;

        if !env_in_list(&list.envs, name) {
            return Err(EnvError::EnvNotFound {
                name: name.to_string(),
            });
        }

        debug!(env = name, conda = %conda.display(), "conda environment activated");
        Ok(Self {
            conda,
            name: name.to_string(),
        })
    }

    /// Name of the activated environment
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a command that runs `program` inside this environment
    ///
    /// Routed through `conda run --no-capture-output` so the child
    /// inherits the terminal and can prompt the user interactively.
    pub fn command<I, S>(&self, program: &str, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(&self.conda);
        cmd.args(["run", "--no-capture-output", "-n", &self.name, program]);
        cmd.args(args);
        cmd
    }
}

/// Match an environment name against listed prefixes
///
/// Named environments appear as `<prefix>/envs/<name>`, so the match is
/// on the final path component, never a substring. The base install
/// prefix is listed too; `base` is considered present whenever the list
/// is nonempty.
fn env_in_list(envs: &[PathBuf], name: &str) -> bool {
    if name == "base" {
        return !envs.is_empty();
    }

    envs.iter()
        .any(|prefix| prefix.file_name().is_some_and(|last| last == name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listed(paths: &[&str]) -> Vec<PathBuf> {
        paths.iter().map(|p| PathBuf::from(*p)).collect()
    }

    #[test]
    fn env_matched_by_final_component() {
        let envs = listed(&["/home/u/miniconda3", "/home/u/miniconda3/envs/pixiv"]);
        assert!(env_in_list(&envs, "pixiv"));
        assert!(!env_in_list(&envs, "Test001"));
    }

    #[test]
    fn env_match_is_not_substring() {
        let envs = listed(&["/home/u/miniconda3/envs/pixiv-old"]);
        assert!(!env_in_list(&envs, "pixiv"));
    }

    #[test]
    fn base_present_when_any_env_listed() {
        let envs = listed(&["/home/u/miniconda3"]);
        assert!(env_in_list(&envs, "base"));
        assert!(!env_in_list(&[], "base"));
    }

    #[test]
    fn command_routes_through_conda_run() {
        let env = CondaEnvironment {
            conda: PathBuf::from("/opt/conda/bin/conda"),
            name: "pixiv".to_string(),
        };
        let cmd = env.command("python", ["pixiv_auth.py", "login"]);

        assert_eq!(cmd.get_program(), "/opt/conda/bin/conda");
        let args: Vec<_> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            [
                "run",
                "--no-capture-output",
                "-n",
                "pixiv",
                "python",
                "pixiv_auth.py",
                "login"
            ]
        );
    }

    #[test]
    fn env_list_json_parses() {
        let json = r#"{"envs": ["/home/u/miniconda3", "/home/u/miniconda3/envs/pixiv"]}"#;
        let list: EnvList = serde_json::from_str(json).unwrap();
        assert_eq!(list.envs.len(), 2);
        assert!(env_in_list(&list.envs, "pixiv"));
    }
}
