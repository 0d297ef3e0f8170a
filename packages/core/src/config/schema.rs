//! Configuration schema for pixiv-token-bootstrap
//!
//! Defines the structure and defaults for the config.json file.

use serde::{Deserialize, Serialize};

/// Main configuration structure for pixiv-token-bootstrap
///
/// Serialized to/from `~/.config/pixiv-token-bootstrap/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version for migrations
    pub version: u32,

    /// Name of the conda environment that hosts the auth script (default: "pixiv")
    #[serde(default = "default_conda_env")]
    pub conda_env: String,

    /// Path to the external authentication script (default: "pixiv_auth.py")
    ///
    /// Invoked as `python <auth_script> login` inside the conda environment.
    /// The script owns the whole OAuth exchange; this tool never touches it.
    #[serde(default = "default_auth_script")]
    pub auth_script: String,

    /// Path where the auth script is expected to save the refresh token
    /// (default: "auth.key")
    #[serde(default = "default_auth_key_file")]
    pub auth_key_file: String,

    /// Wait for a key press before exiting so the user can read the
    /// script's output (default: true)
    #[serde(default = "default_pause_on_exit")]
    pub pause_on_exit: bool,
}

fn default_conda_env() -> String {
    "pixiv".to_string()
}

fn default_auth_script() -> String {
    "pixiv_auth.py".to_string()
}

fn default_auth_key_file() -> String {
    "auth.key".to_string()
}

fn default_pause_on_exit() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            conda_env: default_conda_env(),
            auth_script: default_auth_script(),
            auth_key_file: default_auth_key_file(),
            pause_on_exit: default_pause_on_exit(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }
}
