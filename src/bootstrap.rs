//! Install-script location and child process launch.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::LaunchError;

/// Progress line printed to stdout before the script is launched.
pub const PROGRESS_MESSAGE: &str = "Running base installation...";

/// Get the directory containing the current executable.
///
/// This is the base directory for the whole layout: the install script lives
/// in a `scripts/` subdirectory next to the binary, and the script runs with
/// this directory as its working directory.
pub fn base_dir() -> Result<PathBuf, LaunchError> {
    let exe = std::env::current_exe().map_err(|source| LaunchError::BaseDir { source })?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| LaunchError::BaseDir {
            source: std::io::Error::other("executable path has no parent directory"),
        })
}

/// Absolute path of the install script for a given base directory.
///
/// The result is always relative to `base_dir`, never to the caller's
/// current working directory.
#[must_use]
pub fn script_path(base_dir: &Path) -> PathBuf {
    base_dir.join("scripts").join("base-install.sh")
}

/// Resolve the bash interpreter from PATH.
fn bash_executable() -> Result<PathBuf, LaunchError> {
    which::which("bash").map_err(|_| LaunchError::ShellUnavailable)
}

/// Launch the install script and block until it finishes.
///
/// The child inherits all three standard streams directly (no capture, no
/// buffering layer) and runs with `base_dir` as its working directory, so
/// the script sees the same layout no matter where the bootstrapper was
/// invoked from. A single failed attempt is terminal: any non-zero exit or
/// launch failure comes back as a `LaunchError`.
pub fn run(base_dir: &Path) -> Result<(), LaunchError> {
    let script = script_path(base_dir);
    if !script.exists() {
        return Err(LaunchError::ScriptMissing { path: script });
    }
    let bash = bash_executable()?;

    println!("{}\n", PROGRESS_MESSAGE);

    let status = Command::new(bash)
        .arg(&script)
        .current_dir(base_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| LaunchError::Spawn { source })?;

    if !status.success() {
        return Err(LaunchError::ExitStatus { status });
    }

    Ok(())
}
