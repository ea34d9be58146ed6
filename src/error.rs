//! Failure type for locating and launching the install script.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Anything that prevents the install script from completing successfully.
///
/// Every variant maps to process exit code 1; the variants only shape the
/// detail shown after the failure label on stderr.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// No install script at the expected location next to the binary.
    #[error("install script not found at {}", .path.display())]
    ScriptMissing { path: PathBuf },

    /// No `bash` interpreter available on PATH.
    #[error("bash not found on PATH")]
    ShellUnavailable,

    /// The executable's own directory could not be determined.
    #[error("could not locate the bootstrapper directory: {source}")]
    BaseDir { source: std::io::Error },

    /// The child process could not be started at all.
    #[error("failed to launch install script: {source}")]
    Spawn { source: std::io::Error },

    /// The script ran and reported failure (or was killed by a signal).
    #[error("install script failed: {status}")]
    ExitStatus { status: ExitStatus },
}
