//! Core library for pixiv-token-bootstrap
//!
//! This crate holds everything the CLI shares:
//! - Configuration schema, platform paths, and a comment-tolerant loader
//! - Conda environment discovery and activation
//! - Synchronous delegation to the external authentication script
//! - Refresh-token key file inspection
//! - The wrapper's own error taxonomy, kept distinct from the delegated
//!   script's reported exit status

pub mod config;
pub mod delegate;
pub mod env;
pub mod error;
pub mod token;

pub use config::{Config, load_config_or_default, save_config};
pub use delegate::{DelegateError, DelegateOutcome, spawn_and_wait};
pub use env::{CondaEnvironment, EnvError, locate_conda};
pub use error::{BootstrapError, EXIT_ACTIVATION_FAILED};
pub use token::{TokenFileStatus, inspect_token_file};
