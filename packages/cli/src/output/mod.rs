//! Output utilities for CLI commands
//!
//! Color styling for token-file states and rich, actionable error
//! formatting for activation and delegation failures.

pub mod colors;
pub mod errors;

pub use colors::status_style;
pub use errors::show_bootstrap_error;
