//! Color utilities for CLI output

use console::{Style, StyledObject};
use pixiv_token_bootstrap_core::TokenFileStatus;

/// Style a token-file status label with appropriate colors
///
/// - present -> green bold
/// - empty -> yellow
/// - missing -> red
pub fn status_style(status: &TokenFileStatus) -> StyledObject<String> {
    let (label, style) = match status {
        TokenFileStatus::Present { .. } => ("present", Style::new().green().bold()),
        TokenFileStatus::Empty => ("empty", Style::new().yellow()),
        TokenFileStatus::Missing => ("missing", Style::new().red()),
    };
    style.apply_to(label.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_label() {
        let styled = status_style(&TokenFileStatus::Present { bytes: 16 });
        assert_eq!(styled.to_string(), "present");
    }

    #[test]
    fn empty_label() {
        let styled = status_style(&TokenFileStatus::Empty);
        assert_eq!(styled.to_string(), "empty");
    }

    #[test]
    fn missing_label() {
        let styled = status_style(&TokenFileStatus::Missing);
        assert_eq!(styled.to_string(), "missing");
    }
}
