//! # base-install
//!
//! One-shot launcher for the companion install script: resolves
//! `scripts/base-install.sh` next to this binary, runs it with inherited
//! streams, and exits 0 on success or 1 on any failure.

/// Entry point for the CLI tool.
fn main() {
    base_install::cli::run_cli();
}
