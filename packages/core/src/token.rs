//! Refresh-token key file inspection
//!
//! The key file is produced by the external auth script; this tool only
//! inspects it, for the advisory post-run check and the `check`
//! command. The check mirrors the downstream consumer's preflight:
//! the file must exist and hold a non-blank token string.

use std::fs;
use std::io;
use std::path::Path;

/// Classification of the refresh-token key file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFileStatus {
    /// File does not exist
    Missing,
    /// File exists but holds no token (empty or whitespace only)
    Empty,
    /// File holds a token of the given trimmed byte length
    Present { bytes: usize },
}

/// Inspect the key file without interpreting its contents
///
/// Errors only on IO failures other than the file being absent.
pub fn inspect_token_file(path: &Path) -> io::Result<TokenFileStatus> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(TokenFileStatus::Missing);
        }
        Err(err) => return Err(err),
    };

    let token = text.trim();
    if token.is_empty() {
        Ok(TokenFileStatus::Empty)
    } else {
        Ok(TokenFileStatus::Present {
            bytes: token.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file() {
        let dir = TempDir::new().unwrap();
        let status = inspect_token_file(&dir.path().join("auth.key")).unwrap();
        assert_eq!(status, TokenFileStatus::Missing);
    }

    #[test]
    fn whitespace_only_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("auth.key");
        fs::write(&path, " \n\t\n").unwrap();
        assert_eq!(inspect_token_file(&path).unwrap(), TokenFileStatus::Empty);
    }

    #[test]
    fn token_text_is_present_with_trimmed_length() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("auth.key");
        fs::write(&path, "0123456789abcdef\n").unwrap();
        assert_eq!(
            inspect_token_file(&path).unwrap(),
            TokenFileStatus::Present { bytes: 16 }
        );
    }
}
