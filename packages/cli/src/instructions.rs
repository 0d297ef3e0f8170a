//! Manual token-capture instructions
//!
//! The fixed, numbered procedure the user follows in a browser before
//! the auth script takes over. Rendering is split from printing so the
//! sequence can be asserted stable in tests: every invocation must emit
//! the same lines in the same order.

use console::style;
use pixiv_token_bootstrap_core::Config;

/// Network-tab filter that isolates the OAuth redirect request
pub const CALLBACK_FILTER: &str = "callback?";

/// Build the ordered instruction steps for the given configuration
///
/// Pure function of the config; no hidden state between invocations.
pub fn instruction_lines(config: &Config) -> Vec<String> {
    let steps = [
        "Open https://app-api.pixiv.net/web/v1/login in a browser.".to_string(),
        "Open the browser developer tools (F12) and select the Network tab.".to_string(),
        format!("Type `{CALLBACK_FILTER}` into the request filter box."),
        "Log in to pixiv as usual.".to_string(),
        "Select the request matching the filter and copy the `code` parameter \
         from its redirect URL. The code expires quickly, so move on right away."
            .to_string(),
        format!(
            "Paste the code into the prompt shown by `{}` below.",
            config.auth_script
        ),
        format!(
            "When the script finishes, your refresh token is saved to `{}`.",
            config.auth_key_file
        ),
    ];

    steps
        .into_iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect()
}

/// Print the instruction header and steps to stdout
pub fn print_instructions(config: &Config) {
    println!();
    println!("{}", style("pixiv refresh token setup").cyan().bold());
    println!("{}", style("=".repeat(25)).dim());
    println!();
    for line in instruction_lines(config) {
        println!("  {line}");
    }
    println!();
}
