//! Error types for the runner module.

use thiserror::Error;

/// Result type alias for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Errors that can occur while detecting or running a package manager.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("No package manager found: neither pnpm nor npm is available on PATH")]
    NoPackageManagerFound,

    #[error("Install failed: `{command}` {reason}")]
    InstallFailed { command: String, reason: String },
}
