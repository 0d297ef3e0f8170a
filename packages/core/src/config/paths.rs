//! Platform config paths
//!
//! Resolved through the `directories` crate so the config lands in the
//! platform-conventional location. `PIXIV_BOOTSTRAP_CONFIG_DIR`
//! overrides the directory, which test harnesses use to avoid touching
//! the real home directory.

use directories::ProjectDirs;
use std::path::PathBuf;

const CONFIG_DIR_ENV: &str = "PIXIV_BOOTSTRAP_CONFIG_DIR";
const CONFIG_FILE_NAME: &str = "config.json";

/// Get the configuration directory
///
/// Linux: `~/.config/pixiv-token-bootstrap`
/// macOS: `~/Library/Application Support/pixiv-token-bootstrap`
pub fn get_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }

    ProjectDirs::from("", "", "pixiv-token-bootstrap").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the full path to the config file
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_ends_with_file_name() {
        if let Some(path) = get_config_path() {
            assert!(path.ends_with(CONFIG_FILE_NAME));
        }
    }
}
