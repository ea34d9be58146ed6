//! # base-install
//!
//! Bootstrapper for the base install script: locates `scripts/base-install.sh`
//! next to the binary, runs it with inherited standard streams, and maps its
//! exit status onto the bootstrapper's own.

pub mod bootstrap;
pub mod cli;
pub mod error;

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
