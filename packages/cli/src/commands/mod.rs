//! CLI command implementations

mod bootstrap;
mod check;
mod config;

pub use bootstrap::cmd_bootstrap;
pub use check::{CheckArgs, cmd_check};
pub use config::{ConfigArgs, cmd_config};
