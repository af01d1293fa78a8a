//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (audit thresholds, confidence defaults, tool URLs)
//! - Library configuration and its validation
//! - CLI option enums and the `clap` command-line definition

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command, SourceArgs};
pub use constants::*;
pub use types::{
    Config, ConfidenceConfig, ConfigValidationError, LogFormat, LogLevel, OutputFormat,
};
