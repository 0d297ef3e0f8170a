//! Final acknowledgment pause
//!
//! Keeps the terminal open until the user presses a key, so the auth
//! script's output stays readable when the tool is launched from a
//! double-click or a closing shell window.

use console::{Term, style};
use tracing::debug;

/// Decide whether to pause before exiting
///
/// The pause is skipped with `--no-pause`, when the config disables it,
/// or when stdout is not a terminal (there is nobody to press a key).
pub fn should_pause(no_pause_flag: bool, pause_on_exit: bool, is_term: bool) -> bool {
    !no_pause_flag && pause_on_exit && is_term
}

/// Block until a single key press
///
/// By the time this runs the delegated exit code is already decided, so
/// a terminal read failure must not surface: it is logged and the pause
/// simply ends.
pub fn wait_for_acknowledgment() {
    let term = Term::stdout();
    println!();
    println!("{}", style("Press any key to close...").dim());
    if let Err(err) = term.read_key() {
        debug!(%err, "acknowledgment read failed, continuing");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_requires_all_three_conditions() {
        assert!(should_pause(false, true, true));
        assert!(!should_pause(true, true, true));
        assert!(!should_pause(false, false, true));
        assert!(!should_pause(false, true, false));
    }

    #[test]
    fn acknowledgment_completes_without_an_attended_terminal() {
        // A real terminal would block waiting for the key press
        if Term::stdout().is_term() {
            return;
        }
        // Must return normally whatever the terminal read does; an
        // error here could otherwise mask the delegated exit code.
        wait_for_acknowledgment();
    }
}
