//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `schema_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the rendered result and choosing the exit code
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use schema_audit::initialization::init_logger_with;
use schema_audit::{run_command, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_command(&cli).await {
        Ok(outcome) => {
            print!("{}", outcome.output);
            if !outcome.output.ends_with('\n') {
                println!();
            }
            if !outcome.success {
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("schema_audit error: {:#}", e);
            process::exit(1);
        }
    }
}
