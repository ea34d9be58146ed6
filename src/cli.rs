//! CLI module containing the main entry point logic.
//!
//! This module is separated from main.rs so the exit-code mapping can be
//! exercised from tests without spawning the binary.

use crate::{bootstrap, error::LaunchError};
use clap::Parser as ClapParser;
use std::path::PathBuf;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Label prefixed to every failure message on stderr.
pub const FAILURE_LABEL: &str = "Installation failed:";

/// CLI arguments for the bootstrapper.
#[derive(ClapParser)]
#[command(name = "base-install")]
#[command(version = PKG_VERSION)]
#[command(about = "Launch the base install script", long_about = None)]
struct Cli {
    /// Directory containing the scripts/ tree (defaults to the directory
    /// the binary itself lives in)
    #[arg(long = "script-dir", value_name = "PATH")]
    script_dir: Option<PathBuf>,
}

/// Format a failure for stderr: fixed label, then the error detail.
fn failure_message(error: &LaunchError) -> String {
    format!("{} {}", FAILURE_LABEL, error)
}

/// Resolve the base directory and run the install script under it.
fn run_bootstrap(script_dir: Option<PathBuf>) -> Result<(), LaunchError> {
    let base_dir = match script_dir {
        Some(dir) => dir,
        None => bootstrap::base_dir()?,
    };
    bootstrap::run(&base_dir)
}

/// Main CLI logic: run the script and map the outcome to an exit code.
///
/// Success exits 0 with no output beyond the progress line; any failure is
/// printed once to stderr and exits 1.
pub fn run_cli() {
    let cli = Cli::parse();

    if let Err(e) = run_bootstrap(cli.script_dir) {
        crate::fatal_error(&failure_message(&e));
    }
}
