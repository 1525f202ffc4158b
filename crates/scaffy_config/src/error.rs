//! Error types for configuration resolution.

use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while resolving a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Scripted answers exhausted at prompt: {0}")]
    ScriptExhausted(String),

    #[error("Scripted answer does not fit prompt '{prompt}': {message}")]
    ScriptMismatch { prompt: String, message: String },

    #[error("Unknown {kind}: {value}")]
    UnknownChoice { kind: &'static str, value: String },
}

impl ConfigError {
    /// Whether this error means the operator declined to proceed.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ConfigError::UserCancelled)
    }
}
