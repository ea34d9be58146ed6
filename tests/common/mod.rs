//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    // Get the directory where cargo places test binaries
    let mut path = env::current_exe().unwrap();
    path.pop(); // Remove test executable name

    // Check if we're in a 'deps' directory (integration tests)
    if path.ends_with("deps") {
        path.pop(); // Go up to debug or release
    }

    path.push("base-install");

    // If the binary doesn't exist in debug, try building it first
    if !path.exists() {
        let build_output = Command::new("cargo")
            .args(["build", "--bin", "base-install"])
            .output()
            .expect("Failed to build binary");

        assert!(
            build_output.status.success(),
            "Failed to build base-install binary: {}",
            String::from_utf8_lossy(&build_output.stderr)
        );
    }

    path
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Helper to write a stub install script under `dir/scripts/base-install.sh`
pub fn create_install_script(dir: &Path, body: &str) -> PathBuf {
    let scripts = dir.join("scripts");
    fs::create_dir_all(&scripts).unwrap();
    let path = scripts.join("base-install.sh");
    fs::write(&path, body).unwrap();
    path
}

// The stderr failure label and stdout progress line, as the binary prints them
pub use base_install::bootstrap::PROGRESS_MESSAGE;
pub use base_install::cli::FAILURE_LABEL;
